use std::{fs::File, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use fern_survey::{import_plot, storage::archive};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Pack a plot directory into a zip archive")]
pub struct Pack {
    /// Path to the plot directory
    dir: PathBuf,

    /// Archive to write (defaults to the plot directory name plus .zip)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Pack {
    #[instrument(skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let plot = import_plot(&self.dir)?;

        let output = self
            .output
            .unwrap_or_else(|| self.dir.with_extension("zip"));
        let file = File::create(&output)
            .with_context(|| format!("failed to create {}", output.display()))?;
        archive::pack(&plot, file)?;

        println!("Packed plot {} into {}", plot.plot_id, output.display());
        Ok(())
    }
}
