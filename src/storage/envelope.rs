//! Text rendering and parsing for the `Info.txt`/`Content.csv` file pairs.
//!
//! A form's `Info.txt` is four lines: steward, location (`lat,lon` or
//! `N/A`), date, kind display name. Its `Content.csv` is one encoded row
//! per line with no header. The plot-level `Info.txt` is two lines: plot id
//! and required location. Parsing is all-or-nothing throughout.

use chrono::NaiveDate;

use crate::domain::{
    codec::{empty_string, fill_string, format_date, parse_date, single_line},
    Form, FormKind, Location, LocationError, Plot, PlotForm, Record, RecordError,
};

/// Renders a form's four-line `Info.txt`.
#[must_use]
pub fn render_info<R: Record>(form: &Form<R>, kind: FormKind) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        fill_string(&form.steward),
        Location::encode_optional(form.location.as_ref()),
        format_date(form.date),
        kind.display_name()
    )
}

/// Renders a form's `Content.csv`: one encoded row per line, no header.
#[must_use]
pub fn render_content<R: Record>(form: &Form<R>) -> String {
    form.records()
        .iter()
        .map(Record::encode)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses one form from its `(Info.txt, Content.csv)` pair.
///
/// The kind is resolved from the info's last line and selects the record
/// schema the content is decoded against.
///
/// # Errors
///
/// Returns [`FormError`] if the info does not have exactly four non-empty
/// lines, names an unknown kind, carries an unparseable date or location, or
/// if any content row fails to decode.
pub fn parse_form(info: &str, content: &str) -> Result<PlotForm, FormError> {
    let lines: Vec<&str> = info.lines().filter(|line| !line.is_empty()).collect();
    if lines.len() != 4 {
        return Err(FormError::MalformedInfo(lines.len()));
    }

    let steward = empty_string(lines[0]);
    let location = Location::decode_optional(lines[1])?;
    let date = parse_date(lines[2]).map_err(|_| FormError::InvalidDate(lines[2].to_string()))?;
    let kind = FormKind::from_display_name(lines[3])
        .ok_or_else(|| FormError::UnknownFormKind(lines[3].to_string()))?;

    let form = match kind {
        FormKind::Overstory => {
            PlotForm::Overstory(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::Snags => {
            PlotForm::Snags(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::Wildlife => {
            PlotForm::Wildlife(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::HardwoodPhenology => {
            PlotForm::HardwoodPhenology(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::SoftwoodPhenology => {
            PlotForm::SoftwoodPhenology(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::InvasiveSpecies => {
            PlotForm::InvasiveSpecies(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::TreeHealth => {
            PlotForm::TreeHealth(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::Saplings => {
            PlotForm::Saplings(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::Seedlings => {
            PlotForm::Seedlings(assemble(steward, date, location, parse_content(content)?))
        }
        FormKind::Debris => {
            PlotForm::Debris(assemble(steward, date, location, parse_content(content)?))
        }
    };
    Ok(form)
}

fn assemble<R: Record>(
    steward: String,
    date: NaiveDate,
    location: Option<Location>,
    records: Vec<R>,
) -> Form<R> {
    let mut form = Form::new(records);
    form.steward = steward;
    form.date = date;
    form.location = location;
    form
}

/// Decodes every non-empty content line as a row of schema `R`.
fn parse_content<R: Record>(content: &str) -> Result<Vec<R>, FormError> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| {
            let tokens: Vec<&str> = line.split(',').collect();
            R::decode(&tokens).map_err(|source| FormError::MalformedRecord {
                row: index + 1,
                source,
            })
        })
        .collect()
}

/// Renders the plot-level two-line `Info.txt`.
#[must_use]
pub fn render_plot_info(plot: &Plot) -> String {
    format!("{}\n{}", single_line(&plot.plot_id), plot.location)
}

/// Parses the plot-level `Info.txt` into the plot id and location.
///
/// # Errors
///
/// Returns [`PlotInfoError`] unless the info has exactly two non-empty
/// lines and the second is a valid `lat,lon` pair.
pub fn parse_plot_info(info: &str) -> Result<(String, Location), PlotInfoError> {
    let lines: Vec<&str> = info.lines().filter(|line| !line.is_empty()).collect();
    if lines.len() != 2 {
        return Err(PlotInfoError::MalformedInfo(lines.len()));
    }

    let location = lines[1].parse()?;
    Ok((lines[0].to_string(), location))
}

/// Errors produced while parsing one form's file pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The info text did not have exactly four non-empty lines.
    #[error("expected 4 info lines, found {0}")]
    MalformedInfo(usize),
    /// The info's last line named no known form kind.
    #[error("unknown form kind '{0}'")]
    UnknownFormKind(String),
    /// The info's date line did not match `DD_MM_YYYY`.
    #[error("invalid date '{0}': expected DD_MM_YYYY")]
    InvalidDate(String),
    /// The info's location line was neither `N/A` nor a `lat,lon` pair.
    #[error(transparent)]
    InvalidLocation(#[from] LocationError),
    /// A content row failed to decode. Rows are numbered from 1.
    #[error("record {row}: {source}")]
    MalformedRecord {
        /// 1-based content line number.
        row: usize,
        /// The row-level failure.
        source: RecordError,
    },
}

/// Errors produced while parsing the plot-level info text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlotInfoError {
    /// The info text did not have exactly two non-empty lines.
    #[error("expected 2 info lines, found {0}")]
    MalformedInfo(usize),
    /// The location line was not a valid `lat,lon` pair.
    #[error(transparent)]
    InvalidLocation(#[from] LocationError),
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::records::{DebrisRecord, OverstoryRecord};

    fn sample_form() -> Form<OverstoryRecord> {
        let mut form = Form::new(Vec::new());
        form.steward = "R. Ames".to_string();
        form.date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        form.location = Some(Location::new(44.5, -72.75));
        form.push(OverstoryRecord::decode(&["T1", "Red Oak", "Live", "14.5", "62"]).unwrap());
        form
    }

    #[test]
    fn info_is_four_lines_in_fixed_order() {
        let info = render_info(&sample_form(), FormKind::Overstory);
        assert_eq!(info, "R. Ames\n44.5,-72.75\n07_03_2025\nOverstory");
    }

    #[test]
    fn empty_steward_and_location_use_the_sentinel() {
        let form: Form<DebrisRecord> = Form::new(Vec::new());
        let info = render_info(&form, FormKind::Debris);
        let lines: Vec<&str> = info.lines().collect();
        assert_eq!(lines[0], "N/A");
        assert_eq!(lines[1], "N/A");
        assert_eq!(lines[3], "Debris");
    }

    #[test]
    fn steward_line_breaks_do_not_corrupt_the_info() {
        let mut form = sample_form();
        form.steward = "R.\nAmes".to_string();

        let info = render_info(&form, FormKind::Overstory);
        let parsed = parse_form(&info, "").unwrap();
        let PlotForm::Overstory(reparsed) = parsed else {
            panic!("wrong kind");
        };
        assert_eq!(reparsed.steward, "R. Ames");
    }

    #[test]
    fn form_round_trips_through_its_file_pair() {
        let form = sample_form();
        let info = render_info(&form, FormKind::Overstory);
        let content = render_content(&form);

        let parsed = parse_form(&info, &content).unwrap();
        let PlotForm::Overstory(reparsed) = parsed else {
            panic!("wrong kind");
        };
        assert_eq!(reparsed.steward, form.steward);
        assert_eq!(reparsed.date, form.date);
        assert_eq!(reparsed.location, form.location);
        assert_eq!(reparsed.records()[0].species, "Red Oak");
    }

    #[test]
    fn kind_line_selects_the_record_schema() {
        let info = "N/A\nN/A\n07_03_2025\nSnags";
        // Valid overstory status, invalid snag status: the kind line decides.
        let err = parse_form(info, "T1,Oak,Live,10,30").unwrap_err();
        assert_eq!(
            err,
            FormError::MalformedRecord {
                row: 1,
                source: RecordError::UnknownValue("Live".to_string())
            }
        );
    }

    #[test]
    fn blank_info_lines_are_ignored() {
        let info = "R. Ames\nN/A\n07_03_2025\nSaplings\n\n";
        let parsed = parse_form(info, "").unwrap();
        assert_eq!(parsed.kind(), FormKind::Saplings);
        assert!(parsed.is_empty());
    }

    #[test]
    fn wrong_info_line_count_is_rejected() {
        let err = parse_form("R. Ames\nN/A\n07_03_2025", "").unwrap_err();
        assert_eq!(err, FormError::MalformedInfo(3));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = parse_form("N/A\nN/A\n07_03_2025\nShrubs", "").unwrap_err();
        assert_eq!(err, FormError::UnknownFormKind("Shrubs".to_string()));
    }

    #[test]
    fn bad_dates_and_locations_are_rejected() {
        let err = parse_form("N/A\nN/A\n2025-03-07\nDebris", "").unwrap_err();
        assert_eq!(err, FormError::InvalidDate("2025-03-07".to_string()));

        let err = parse_form("N/A\nnowhere\n07_03_2025\nDebris", "").unwrap_err();
        assert!(matches!(err, FormError::InvalidLocation(_)));
    }

    #[test]
    fn one_bad_row_fails_the_whole_form() {
        let info = "N/A\nN/A\n07_03_2025\nDebris";
        let content = "0,3,3,Oak\n120,bad,2,Maple";
        let err = parse_form(info, content).unwrap_err();
        assert_eq!(
            err,
            FormError::MalformedRecord {
                row: 2,
                source: RecordError::InvalidNumber("bad".to_string())
            }
        );
    }

    #[test]
    fn plot_info_round_trips() {
        let plot = Plot::new(" Plot 10 ", Location::new(44.5, -72.75));
        let info = render_plot_info(&plot);
        assert_eq!(info, " Plot 10 \n44.5,-72.75");

        let (plot_id, location) = parse_plot_info(&info).unwrap();
        assert_eq!(plot_id, " Plot 10 ");
        assert_eq!(location, Location::new(44.5, -72.75));
    }

    #[test]
    fn plot_id_line_breaks_do_not_corrupt_the_info() {
        let plot = Plot::new("Plot\n10", Location::new(1.0, 2.0));
        let info = render_plot_info(&plot);

        let (plot_id, _) = parse_plot_info(&info).unwrap();
        assert_eq!(plot_id, "Plot 10");
    }

    #[test]
    fn plot_info_rejects_wrong_shapes() {
        assert_eq!(
            parse_plot_info("P10").unwrap_err(),
            PlotInfoError::MalformedInfo(1)
        );
        assert!(matches!(
            parse_plot_info("P10\nnowhere").unwrap_err(),
            PlotInfoError::InvalidLocation(_)
        ));
    }

    #[test]
    fn empty_content_parses_to_an_empty_form() {
        let info = "N/A\nN/A\n07_03_2025\nInvasive Species";
        let parsed = parse_form(info, "").unwrap();
        assert_eq!(parsed.kind(), FormKind::InvasiveSpecies);
        assert!(parsed.is_empty());
    }
}
