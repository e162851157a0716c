//! Field-level text conversions shared by every form schema.
//!
//! The on-disk format is comma-delimited with no quoting, so empty text is
//! stored as the sentinel `N/A`, literal commas in free text are replaced
//! with `-`, and line breaks collapse to spaces. The substitutions are lossy
//! for pathological inputs (a field
//! that legitimately contains `N/A`, or a comma the user meant to keep); the
//! format inherits this ambiguity from the original field protocol.

use chrono::NaiveDate;

/// On-disk marker for an absent or empty text value.
pub const NOT_APPLICABLE: &str = "N/A";

/// Date layout used in every `Info.txt`, e.g. `07_03_2025`.
pub const DATE_FORMAT: &str = "%d_%m_%Y";

/// Encodes free text for a CSV cell: empty becomes [`NOT_APPLICABLE`],
/// commas become `-` so the delimiter survives, and line breaks collapse
/// to spaces so the cell cannot span lines.
#[must_use]
pub fn fill_string(s: &str) -> String {
    if s.is_empty() {
        NOT_APPLICABLE.to_string()
    } else {
        single_line(s).replace(',', "-")
    }
}

/// Collapses line breaks to spaces.
///
/// Every info and content value occupies exactly one line, so a value with
/// an embedded newline would shift every line after it.
#[must_use]
pub fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

/// Decodes free text from a CSV cell, mapping [`NOT_APPLICABLE`] back to the
/// empty string.
#[must_use]
pub fn empty_string(s: &str) -> String {
    if s == NOT_APPLICABLE {
        String::new()
    } else {
        s.to_string()
    }
}

/// Prints a decimal without trailing fractional zeros.
///
/// Integral values print with no decimal point (`3.0` -> `"3"`); everything
/// else uses the shortest representation that round-trips (`3.5` -> `"3.5"`,
/// an 8-decimal coordinate keeps all 8 digits).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    value.to_string()
}

/// Lower-cases a display string and joins its words with underscores,
/// producing the canonical token form used for enum matching.
#[must_use]
pub fn canonical_token(s: &str) -> String {
    s.to_lowercase().replace(' ', "_")
}

/// Renders a canonical `lower_underscore` token as capitalized,
/// space-separated words for files and display.
#[must_use]
pub fn display_token(token: &str) -> String {
    token
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encodes a presence flag as the literal `Present`/`Absent`.
#[must_use]
pub const fn format_flag(present: bool) -> &'static str {
    if present {
        "Present"
    } else {
        "Absent"
    }
}

/// Decodes a presence flag; anything other than the literal `Present` is
/// absent.
#[must_use]
pub fn parse_flag(s: &str) -> bool {
    s == "Present"
}

/// Renders a date in the canonical `DD_MM_YYYY` form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `DD_MM_YYYY` date.
///
/// # Errors
///
/// Returns a parse error if the string does not match the format or names an
/// impossible calendar date.
pub fn parse_date(s: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_string_substitutes_sentinel_and_commas() {
        assert_eq!(fill_string(""), "N/A");
        assert_eq!(fill_string("scat, tracks"), "scat- tracks");
        assert_eq!(fill_string("Oak"), "Oak");
    }

    #[test]
    fn line_breaks_never_survive_a_cell() {
        assert_eq!(fill_string("scat\ntracks"), "scat tracks");
        assert_eq!(fill_string("scat\r\ntracks"), "scat tracks");
        assert_eq!(single_line("Plot\n10"), "Plot 10");
    }

    #[test]
    fn empty_string_reverses_sentinel() {
        assert_eq!(empty_string("N/A"), "");
        assert_eq!(empty_string("Oak"), "Oak");
    }

    #[test]
    fn fill_and_empty_round_trip_plain_text() {
        for s in ["Oak", "", "two words"] {
            assert_eq!(empty_string(&fill_string(s)), s);
        }
    }

    #[test]
    fn integral_decimals_print_without_point() {
        assert_eq!(format_decimal(3.0), "3");
        assert_eq!(format_decimal(0.0), "0");
    }

    #[test]
    fn fractional_decimals_trim_trailing_zeros() {
        assert_eq!(format_decimal(3.5), "3.5");
        assert_eq!(format_decimal(12.25), "12.25");
    }

    #[test]
    fn high_precision_coordinates_survive() {
        let lat = 44.478_512_34_f64;
        let printed = format_decimal(lat);
        assert_eq!(printed.parse::<f64>().unwrap(), lat);
    }

    #[test]
    fn token_forms_invert() {
        assert_eq!(canonical_token("Dead Downed"), "dead_downed");
        assert_eq!(display_token("dead_downed"), "Dead Downed");
        assert_eq!(display_token("live"), "Live");
    }

    #[test]
    fn flags_use_present_absent_literals() {
        assert_eq!(format_flag(true), "Present");
        assert_eq!(format_flag(false), "Absent");
        assert!(parse_flag("Present"));
        assert!(!parse_flag("present"));
        assert!(!parse_flag("Absent"));
    }

    #[test]
    fn dates_use_day_month_year_with_underscores() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "07_03_2025");
        assert_eq!(parse_date("07_03_2025").unwrap(), date);
        assert!(parse_date("2025-03-07").is_err());
        assert!(parse_date("32_01_2025").is_err());
    }
}
