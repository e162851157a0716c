use std::{fs::File, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use fern_survey::{export_plot, storage::archive};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Unpack a zip archive into a plot directory")]
pub struct Unpack {
    /// Path to the zip archive
    file: PathBuf,

    /// Directory to unpack into (defaults to the archive's parent)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Unpack {
    #[instrument(skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let file =
            File::open(&self.file).with_context(|| format!("failed to open {}", self.file.display()))?;
        let plot = archive::unpack(file)?;

        let output = self.output.unwrap_or_else(|| {
            self.file
                .parent()
                .map_or_else(|| PathBuf::from("."), PathBuf::from)
        });
        let dir = export_plot(&output, &plot)?;

        println!("Unpacked plot {} into {}", plot.plot_id, dir.display());
        Ok(())
    }
}
