//! Forest-Ecology Plot Surveys
//!
//! Plots are directories of plain-text `Info.txt`/`Content.csv` files, one
//! file pair per survey form.

pub mod domain;
pub use domain::{Config, Form, FormKind, Location, Plot, PlotForm, Record};

/// Filesystem and archive codecs for plots.
pub mod storage;
pub use storage::directory::{export_plot, import_plot};
