//! The byte-stream boundary: one plot ⇄ one zip archive.
//!
//! Entry names mirror the directory layout (`<PlotID>/Info.txt`,
//! `<PlotID>/<Folder>/Content.csv`), so an unpacked archive is exactly an
//! exported plot directory. Unpacking is atomic like directory import.

use std::io::{self, Read, Seek, Write};

use zip::{result::ZipError, write::SimpleFileOptions, ZipArchive, ZipWriter};

use crate::{
    domain::{Form, FormKind, Plot, PlotError, Record},
    storage::{
        directory::{CONTENT_FILE, INFO_FILE},
        envelope::{self, FormError, PlotInfoError},
    },
};

/// Packs the plot's full layout into a zip archive on `writer`.
///
/// # Errors
///
/// Returns [`ArchiveError`] if the archive cannot be written.
pub fn pack<W: Write + Seek>(plot: &Plot, writer: W) -> Result<(), ArchiveError> {
    let mut zip = ZipWriter::new(writer);
    let root = plot.plot_id.trim().to_string();

    zip.start_file(format!("{root}/{INFO_FILE}"), SimpleFileOptions::default())?;
    zip.write_all(envelope::render_plot_info(plot).as_bytes())?;

    pack_form(&mut zip, &root, FormKind::Overstory, &plot.overstory)?;
    pack_form(&mut zip, &root, FormKind::Snags, &plot.snags)?;
    pack_form(&mut zip, &root, FormKind::Wildlife, &plot.wildlife)?;
    pack_form(
        &mut zip,
        &root,
        FormKind::HardwoodPhenology,
        &plot.hardwood_phenology,
    )?;
    pack_form(
        &mut zip,
        &root,
        FormKind::SoftwoodPhenology,
        &plot.softwood_phenology,
    )?;
    pack_form(
        &mut zip,
        &root,
        FormKind::InvasiveSpecies,
        &plot.invasive_species,
    )?;
    pack_form(&mut zip, &root, FormKind::TreeHealth, &plot.tree_health)?;
    pack_form(&mut zip, &root, FormKind::Saplings, &plot.saplings)?;
    pack_form(&mut zip, &root, FormKind::Seedlings, &plot.seedlings)?;
    pack_form(&mut zip, &root, FormKind::Debris, &plot.debris)?;

    zip.finish()?;
    tracing::info!(plot = %plot.plot_id, "packed plot archive");
    Ok(())
}

fn pack_form<W: Write + Seek, R: Record>(
    zip: &mut ZipWriter<W>,
    root: &str,
    kind: FormKind,
    form: &Form<R>,
) -> Result<(), ArchiveError> {
    let folder = kind.folder_name();
    let options = SimpleFileOptions::default();

    zip.start_file(format!("{root}/{folder}/{INFO_FILE}"), options)?;
    zip.write_all(envelope::render_info(form, kind).as_bytes())?;

    zip.start_file(format!("{root}/{folder}/{CONTENT_FILE}"), options)?;
    zip.write_all(envelope::render_content(form).as_bytes())?;
    Ok(())
}

/// Reads a plot back from a zip archive on `reader`.
///
/// The plot root inside the archive is located by its top-level `Info.txt`
/// entry.
///
/// # Errors
///
/// Returns [`ArchiveError`] if the archive is unreadable, a required entry
/// is missing, or any text fails to parse.
pub fn unpack<R: Read + Seek>(reader: R) -> Result<Plot, ArchiveError> {
    let mut archive = ZipArchive::new(reader)?;
    let root = find_root(&archive)?;

    let info = read_entry(&mut archive, &format!("{root}/{INFO_FILE}"))?;
    let (plot_id, location) = envelope::parse_plot_info(&info)?;

    let mut forms = Vec::with_capacity(FormKind::ALL.len());
    for kind in FormKind::ALL {
        let folder = kind.folder_name();
        let info = read_entry(&mut archive, &format!("{root}/{folder}/{INFO_FILE}"))?;
        let content = read_entry(&mut archive, &format!("{root}/{folder}/{CONTENT_FILE}"))?;
        let form = envelope::parse_form(&info, &content)
            .map_err(|source| ArchiveError::Form { kind, source })?;
        forms.push(form);
    }

    let plot = Plot::from_forms(plot_id, location, forms)?;
    tracing::debug!(plot = %plot.plot_id, "unpacked plot archive");
    Ok(plot)
}

/// The top-level directory name inside the archive: the single path segment
/// whose `Info.txt` sits one level deep.
fn find_root<R: Read + Seek>(archive: &ZipArchive<R>) -> Result<String, ArchiveError> {
    archive
        .file_names()
        .find_map(|name| {
            name.strip_suffix("/Info.txt")
                .filter(|root| !root.is_empty() && !root.contains('/'))
                .map(str::to_string)
        })
        .ok_or(ArchiveError::MissingPlotInfo)
}

fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<String, ArchiveError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Err(ArchiveError::MissingEntry(name.to_string())),
        Err(err) => return Err(err.into()),
    };

    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| ArchiveError::ReadEntry {
            name: name.to_string(),
            source,
        })?;
    Ok(text)
}

/// Errors produced while packing or unpacking a plot archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The zip container itself could not be read or written.
    #[error(transparent)]
    Zip(#[from] ZipError),
    /// An entry body could not be written.
    #[error("failed to write archive")]
    Io(#[from] io::Error),
    /// No top-level `Info.txt` entry identifies a plot root.
    #[error("archive contains no plot Info.txt")]
    MissingPlotInfo,
    /// A required entry was absent.
    #[error("archive entry '{0}' is missing")]
    MissingEntry(String),
    /// An entry was present but unreadable or not UTF-8.
    #[error("failed to read archive entry '{name}'")]
    ReadEntry {
        /// The entry name.
        name: String,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The plot-level info entry failed to parse.
    #[error("invalid plot info: {0}")]
    Info(#[from] PlotInfoError),
    /// One form's entry pair failed to parse.
    #[error("{kind} form: {source}")]
    Form {
        /// The kind whose entries were being read.
        kind: FormKind,
        /// The form-level failure.
        source: FormError,
    },
    /// The decoded forms did not cover every kind exactly once.
    #[error(transparent)]
    Plot(#[from] PlotError),
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::domain::{records::SaplingRecord, Location};

    fn sample_plot() -> Plot {
        let mut plot = Plot::new("P10", Location::new(44.5, -72.75));
        plot.set_steward("R. Ames");
        plot.saplings
            .push(SaplingRecord::decode(&["Striped Maple", "4", "2", "0", "1"]).unwrap());
        plot
    }

    #[test]
    fn plot_round_trips_through_an_archive() {
        let mut buffer = Cursor::new(Vec::new());
        pack(&sample_plot(), &mut buffer).unwrap();

        buffer.set_position(0);
        let plot = unpack(buffer).unwrap();
        assert_eq!(plot.plot_id, "P10");
        assert_eq!(plot.location, Location::new(44.5, -72.75));
        assert_eq!(plot.saplings.records()[0].counts, [4, 2, 0, 1]);
        assert_eq!(plot.wildlife.len(), 7);
    }

    #[test]
    fn entry_names_mirror_the_directory_layout() {
        let mut buffer = Cursor::new(Vec::new());
        pack(&sample_plot(), &mut buffer).unwrap();

        buffer.set_position(0);
        let archive = ZipArchive::new(buffer).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"P10/Info.txt"));
        assert!(names.contains(&"P10/Hardwood_Phenology/Content.csv"));
        assert!(names.contains(&"P10/Tree_Health/Info.txt"));
        assert_eq!(names.len(), 21);
    }

    #[test]
    fn a_missing_form_entry_fails_the_unpack() {
        // An archive holding only the plot info, none of the form pairs.
        let mut buffer = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(&mut buffer);
        zip.start_file("P10/Info.txt", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"P10\n44.5,-72.75").unwrap();
        zip.finish().unwrap();

        buffer.set_position(0);
        let err = unpack(buffer).unwrap_err();
        assert!(matches!(err, ArchiveError::MissingEntry(name)
            if name == "P10/Overstory/Info.txt"));
    }

    #[test]
    fn an_archive_without_plot_info_is_rejected() {
        let mut buffer = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(&mut buffer);
        zip.start_file("notes.txt", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"nothing here").unwrap();
        zip.finish().unwrap();

        buffer.set_position(0);
        let err = unpack(buffer).unwrap_err();
        assert!(matches!(err, ArchiveError::MissingPlotInfo));
    }
}
