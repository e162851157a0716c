use std::path::PathBuf;

use clap::Parser;
use fern_survey::import_plot;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Show a plot's metadata and per-form record counts")]
pub struct Show {
    /// Path to the plot directory
    dir: PathBuf,
}

impl Show {
    #[instrument(skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let plot = import_plot(&self.dir)?;

        println!("Plot {}", plot.plot_id);
        println!("Location: {}", plot.location);
        println!();
        for (kind, count) in plot.record_counts() {
            println!("  {:<20} {count} records", kind.to_string());
        }

        Ok(())
    }
}
