use std::path::PathBuf;

use clap::Parser;
use fern_survey::import_plot;
use tracing::instrument;
use walkdir::WalkDir;

#[derive(Debug, Parser)]
#[command(about = "List the plot directories under a root")]
pub struct List {
    /// Directory to scan (defaults to plot_dirs from fern.toml, then the
    /// survey root)
    dir: Option<PathBuf>,

    /// Also name the subdirectories that fail to import
    #[arg(long)]
    all: bool,
}

impl List {
    #[instrument(skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let root = scan_root(self.dir, root);

        let mut plots = 0usize;
        for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }

            match import_plot(entry.path()) {
                Ok(plot) => {
                    let records: usize =
                        plot.record_counts().iter().map(|(_, count)| count).sum();
                    println!("{:<20} {} ({records} records)", plot.plot_id, plot.location);
                    plots += 1;
                }
                Err(error) => {
                    tracing::debug!(path = %entry.path().display(), %error, "not a plot");
                    if self.all {
                        println!("{:<20} (not a plot)", entry.file_name().to_string_lossy());
                    }
                }
            }
        }

        if plots == 0 {
            println!("No plots found in {}", root.display());
        }
        Ok(())
    }
}

/// The directory to scan: an explicit argument wins, then `plot_dirs` from
/// the configuration resolved against the survey root, then the root itself.
fn scan_root(dir: Option<PathBuf>, root: PathBuf) -> PathBuf {
    dir.unwrap_or_else(|| match super::load_config(&root).plot_dirs {
        Some(plot_dirs) => root.join(plot_dirs),
        None => root,
    })
}

#[cfg(test)]
mod tests {
    use fern_survey::{export_plot, Config, Location, Plot};
    use tempfile::tempdir;

    use super::*;
    use crate::cli::CONFIG_FILE;

    fn save_plot_dirs(root: &std::path::Path, plot_dirs: &str) {
        let config = Config {
            plot_dirs: Some(PathBuf::from(plot_dirs)),
            ..Config::default()
        };
        config.save(&root.join(CONFIG_FILE)).unwrap();
    }

    #[test]
    fn scan_root_prefers_the_explicit_argument() {
        let tmp = tempdir().unwrap();
        save_plot_dirs(tmp.path(), "plots");

        let explicit = PathBuf::from("elsewhere");
        let resolved = scan_root(Some(explicit.clone()), tmp.path().to_path_buf());
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn scan_root_reads_plot_dirs_from_config() {
        let tmp = tempdir().unwrap();
        save_plot_dirs(tmp.path(), "plots");

        let resolved = scan_root(None, tmp.path().to_path_buf());
        assert_eq!(resolved, tmp.path().join("plots"));
    }

    #[test]
    fn scan_root_defaults_to_the_survey_root() {
        let tmp = tempdir().unwrap();
        let resolved = scan_root(None, tmp.path().to_path_buf());
        assert_eq!(resolved, tmp.path());
    }

    #[test]
    fn run_walks_the_configured_plot_dirs() {
        let tmp = tempdir().unwrap();
        save_plot_dirs(tmp.path(), "plots");
        let plots = tmp.path().join("plots");
        std::fs::create_dir(&plots).unwrap();
        export_plot(&plots, &Plot::new("P10", Location::new(1.0, 2.0))).unwrap();

        let list = List {
            dir: None,
            all: false,
        };
        list.run(tmp.path().to_path_buf())
            .expect("list command should succeed");
    }
}
