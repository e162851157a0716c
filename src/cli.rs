use std::path::{Path, PathBuf};

mod list;
mod pack;
mod show;
mod unpack;

use anyhow::Context;
use clap::ArgAction;
use fern_survey::{export_plot, import_plot, Config, Location, Plot};
use list::List;
use pack::Pack;
use show::Show;
use tracing::instrument;
use unpack::Unpack;

/// File name of the survey-root configuration.
const CONFIG_FILE: &str = "fern.toml";

/// Loads the survey configuration, falling back to defaults when the file is
/// absent or unreadable.
fn load_config(root: &Path) -> Config {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }
    match Config::load(&path) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(%error, "falling back to default configuration");
            Config::default()
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The path to the survey root (holds fern.toml and the plot directories)
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Create and export a fresh empty plot
    Init(Init),

    /// Check that a plot directory imports cleanly
    Validate(Validate),

    /// Show a plot's metadata and per-form record counts
    Show(Show),

    /// List the plot directories under the survey root
    List(List),

    /// Pack a plot directory into a zip archive
    Pack(Pack),

    /// Unpack a zip archive into a plot directory
    Unpack(Unpack),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Init(command) => command.run(&root)?,
            Self::Validate(command) => command.run()?,
            Self::Show(command) => command.run()?,
            Self::List(command) => command.run(root)?,
            Self::Pack(command) => command.run()?,
            Self::Unpack(command) => command.run()?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// The plot identifier (also the exported directory name)
    plot_id: String,

    /// Plot center latitude, in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Plot center longitude, in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Steward name stamped on every form (overrides fern.toml)
    #[arg(long)]
    steward: Option<String>,
}

impl Init {
    #[instrument(skip(self))]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut plot = Plot::new(self.plot_id, Location::new(self.lat, self.lon));

        let steward = self
            .steward
            .unwrap_or_else(|| load_config(root).default_steward);
        if !steward.is_empty() {
            plot.set_steward(&steward);
        }

        let dir = export_plot(root, &plot)?;
        println!("Created plot {} in {}", plot.plot_id, dir.display());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Validate {
    /// Path to the plot directory
    dir: PathBuf,
}

impl Validate {
    #[instrument(skip(self))]
    fn run(self) -> anyhow::Result<()> {
        let plot = import_plot(&self.dir)
            .with_context(|| format!("{} is not a valid plot", self.dir.display()))?;
        println!("✅ {} is a valid plot", plot.plot_id);
        Ok(())
    }
}
