//! The directory boundary: one plot ⇄ one nested folder of text files.
//!
//! The layout, rooted at `<PlotID>/` (surrounding whitespace trimmed):
//! a plot-level `Info.txt`, then one `<Folder>/Info.txt` +
//! `<Folder>/Content.csv` pair per form kind. Import is atomic: any
//! unreadable file or failed parse yields no plot at all. Export reports
//! every failed write.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    domain::{Form, FormKind, Plot, PlotError, Record},
    storage::envelope::{self, FormError, PlotInfoError},
};

/// File name of the metadata text in the plot root and every form folder.
pub const INFO_FILE: &str = "Info.txt";

/// File name of the record table in every form folder.
pub const CONTENT_FILE: &str = "Content.csv";

/// Writes the plot's full directory layout under `root`.
///
/// Returns the plot directory path, `root/<trimmed plot id>`.
///
/// # Errors
///
/// Returns [`ExportError`] if any directory cannot be created or any file
/// cannot be written.
pub fn export_plot(root: &Path, plot: &Plot) -> Result<PathBuf, ExportError> {
    let dir = root.join(plot.plot_id.trim());
    create_dir(&dir)?;
    write_text(&dir.join(INFO_FILE), &envelope::render_plot_info(plot))?;

    write_form(&dir, FormKind::Overstory, &plot.overstory)?;
    write_form(&dir, FormKind::Snags, &plot.snags)?;
    write_form(&dir, FormKind::Wildlife, &plot.wildlife)?;
    write_form(&dir, FormKind::HardwoodPhenology, &plot.hardwood_phenology)?;
    write_form(&dir, FormKind::SoftwoodPhenology, &plot.softwood_phenology)?;
    write_form(&dir, FormKind::InvasiveSpecies, &plot.invasive_species)?;
    write_form(&dir, FormKind::TreeHealth, &plot.tree_health)?;
    write_form(&dir, FormKind::Saplings, &plot.saplings)?;
    write_form(&dir, FormKind::Seedlings, &plot.seedlings)?;
    write_form(&dir, FormKind::Debris, &plot.debris)?;

    tracing::info!(plot = %plot.plot_id, path = %dir.display(), "exported plot");
    Ok(dir)
}

fn write_form<R: Record>(dir: &Path, kind: FormKind, form: &Form<R>) -> Result<(), ExportError> {
    let folder = dir.join(kind.folder_name());
    create_dir(&folder)?;
    write_text(&folder.join(INFO_FILE), &envelope::render_info(form, kind))?;
    write_text(&folder.join(CONTENT_FILE), &envelope::render_content(form))
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_text(path: &Path, text: &str) -> Result<(), ExportError> {
    fs::write(path, text).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a plot back from its directory layout.
///
/// # Errors
///
/// Returns [`ImportError`] if any required file is unreadable, any info or
/// content text fails to parse, or the ten folders do not yield exactly one
/// form per kind.
pub fn import_plot(dir: &Path) -> Result<Plot, ImportError> {
    let info = read_text(&dir.join(INFO_FILE))?;
    let (plot_id, location) = envelope::parse_plot_info(&info)?;

    let mut forms = Vec::with_capacity(FormKind::ALL.len());
    for kind in FormKind::ALL {
        let folder = dir.join(kind.folder_name());
        let info = read_text(&folder.join(INFO_FILE))?;
        let content = read_text(&folder.join(CONTENT_FILE))?;
        let form = envelope::parse_form(&info, &content)
            .map_err(|source| ImportError::Form { kind, source })?;
        forms.push(form);
    }

    let plot = Plot::from_forms(plot_id, location, forms)?;
    tracing::debug!(plot = %plot.plot_id, path = %dir.display(), "imported plot");
    Ok(plot)
}

fn read_text(path: &Path) -> Result<String, ImportError> {
    fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors produced while writing a plot directory.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A directory could not be created.
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// A file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

/// Errors produced while reading a plot directory.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// A required file was missing, unreadable, or not UTF-8.
    #[error("failed to read {}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The plot-level info text failed to parse.
    #[error("invalid plot info: {0}")]
    Info(#[from] PlotInfoError),
    /// One form's file pair failed to parse.
    #[error("{kind} form: {source}")]
    Form {
        /// The kind whose folder was being read.
        kind: FormKind,
        /// The form-level failure.
        source: FormError,
    },
    /// The decoded forms did not cover every kind exactly once.
    #[error(transparent)]
    Plot(#[from] PlotError),
}
