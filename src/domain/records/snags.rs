use uuid::Uuid;

use crate::domain::{
    codec::{canonical_token, display_token, empty_string, fill_string, format_decimal},
    record::{check_columns, parse_number, DynamicRows, Record, RecordError},
};

/// One standing-dead tree (snag), with decay observed via the crown.
///
/// Columns: `treeID, species, status, dbh, height`. The same shape as
/// overstory rows, but with a decay-oriented status code set.
#[derive(Debug, Clone, PartialEq)]
pub struct SnagRecord {
    id: Uuid,
    /// Field tag identifying the tree.
    pub tree_id: String,
    /// Common species name.
    pub species: String,
    /// Crown-decay status code.
    pub status: SnagStatus,
    /// Diameter at breast height, in inches.
    pub dbh: f64,
    /// Tree height, in feet.
    pub height: f64,
}

/// Crown-decay codes for snags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnagStatus {
    /// Trunk top and branches appear fully intact.
    #[default]
    CompleteCrown,
    /// Trunk top and branches partially missing or damaged.
    DamagedCrown,
    /// Trunk top and branches have fallen off.
    MissingCrown,
    /// A previously recorded snag that has since fallen.
    Downed,
}

impl SnagStatus {
    /// All status codes, in display order.
    pub const ALL: [Self; 4] = [
        Self::CompleteCrown,
        Self::DamagedCrown,
        Self::MissingCrown,
        Self::Downed,
    ];

    /// The canonical `lower_underscore` token for this status.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::CompleteCrown => "complete_crown",
            Self::DamagedCrown => "damaged_crown",
            Self::MissingCrown => "missing_crown",
            Self::Downed => "downed",
        }
    }

    /// Matches a display or canonical form against the known codes.
    #[must_use]
    pub fn from_display(s: &str) -> Option<Self> {
        let token = canonical_token(&empty_string(s));
        Self::ALL.into_iter().find(|status| status.token() == token)
    }
}

impl Default for SnagRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            tree_id: String::new(),
            species: String::new(),
            status: SnagStatus::default(),
            dbh: 0.0,
            height: 0.0,
        }
    }
}

impl Record for SnagRecord {
    const COLUMNS: usize = 5;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        let status = SnagStatus::from_display(tokens[2])
            .ok_or_else(|| RecordError::UnknownValue(tokens[2].to_string()))?;

        Ok(Self {
            id: Uuid::new_v4(),
            tree_id: empty_string(tokens[0]),
            species: empty_string(tokens[1]),
            status,
            dbh: parse_number(tokens[3])?,
            height: parse_number(tokens[4])?,
        })
    }

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{}",
            fill_string(&self.tree_id),
            fill_string(&self.species),
            display_token(self.status.token()),
            format_decimal(self.dbh),
            format_decimal(self.height)
        )
    }
}

impl DynamicRows for SnagRecord {}
