//! The row-level contract shared by all ten form schemas.

use std::str::FromStr;

use uuid::Uuid;

/// One row of a form's data table.
///
/// Every schema has a fixed column count and order. Decoding consumes an
/// ordered token list and is all-or-nothing; encoding produces the
/// comma-joined row and never fails. Record ids are process-local (fresh on
/// every decode) and never persisted.
pub trait Record: Sized {
    /// Number of comma-separated columns in a CSV row of this schema.
    const COLUMNS: usize;

    /// The row's process-local id, used to address it within a form.
    fn id(&self) -> Uuid;

    /// Parses one row from its raw column tokens.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the token count is wrong, a numeric column
    /// fails to parse, or an enumerated column holds an unknown value.
    fn decode(tokens: &[&str]) -> Result<Self, RecordError>;

    /// Renders the row as its comma-joined column values in fixed order.
    fn encode(&self) -> String;
}

/// Marker for schemas whose rows are a user-extensible list.
///
/// Wildlife and the two phenology forms carry a fixed row set (one row per
/// animal class or phenophase) and do not implement this; their rows are
/// updated in place, never added or removed.
pub trait DynamicRows {}

/// Errors produced while decoding a single record row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The row had the wrong number of columns.
    #[error("expected {expected} columns, found {found}")]
    ColumnCount {
        /// Columns required by the schema.
        expected: usize,
        /// Columns actually present.
        found: usize,
    },
    /// A numeric column could not be parsed.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// An enumerated or range-restricted column held an unknown value.
    #[error("unknown value '{0}'")]
    UnknownValue(String),
}

/// Verifies the token count for a schema before column parsing begins.
pub(crate) fn check_columns(tokens: &[&str], expected: usize) -> Result<(), RecordError> {
    if tokens.len() == expected {
        Ok(())
    } else {
        Err(RecordError::ColumnCount {
            expected,
            found: tokens.len(),
        })
    }
}

/// Parses a numeric token, reporting the offending text on failure.
pub(crate) fn parse_number<T: FromStr>(token: &str) -> Result<T, RecordError> {
    token
        .parse()
        .map_err(|_| RecordError::InvalidNumber(token.to_string()))
}
