use uuid::Uuid;

use crate::domain::{
    codec::{canonical_token, display_token, empty_string, fill_string, format_decimal},
    record::{check_columns, parse_number, DynamicRows, Record, RecordError},
};

/// One measured tree in the 1/10th-acre overstory plot.
///
/// Columns: `treeID, species, status, dbh, height`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverstoryRecord {
    id: Uuid,
    /// Field tag identifying the tree.
    pub tree_id: String,
    /// Common species name.
    pub species: String,
    /// Live/dead status code.
    pub status: TreeStatus,
    /// Diameter at breast height, in inches.
    pub dbh: f64,
    /// Tree height, in feet.
    pub height: f64,
}

/// Status codes for overstory trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStatus {
    /// The tree is alive.
    #[default]
    Live,
    /// Dead and on the ground.
    DeadDowned,
    /// Dead and removed by harvest.
    DeadHarvested,
    /// Dead but still standing.
    DeadStanding,
}

impl TreeStatus {
    /// All status codes, in display order.
    pub const ALL: [Self; 4] = [
        Self::Live,
        Self::DeadDowned,
        Self::DeadHarvested,
        Self::DeadStanding,
    ];

    /// The canonical `lower_underscore` token for this status.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::DeadDowned => "dead_downed",
            Self::DeadHarvested => "dead_harvested",
            Self::DeadStanding => "dead_standing",
        }
    }

    /// Matches a display or canonical form against the known codes.
    #[must_use]
    pub fn from_display(s: &str) -> Option<Self> {
        let token = canonical_token(&empty_string(s));
        Self::ALL.into_iter().find(|status| status.token() == token)
    }
}

impl Default for OverstoryRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            tree_id: String::new(),
            species: String::new(),
            status: TreeStatus::default(),
            dbh: 0.0,
            height: 0.0,
        }
    }
}

impl Record for OverstoryRecord {
    const COLUMNS: usize = 5;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        let status = TreeStatus::from_display(tokens[2])
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

impl DynamicRows for OverstoryRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_full_row() {
        let row = "T12,Sugar Maple,Dead Downed,14.5,62";
        let record = OverstoryRecord::decode(&row.split(',').collect::<Vec<_>>()).unwrap();

        assert_eq!(record.tree_id, "T12");
        assert_eq!(record.species, "Sugar Maple");
        assert_eq!(record.status, TreeStatus::DeadDowned);
        assert_eq!(record.dbh, 14.5);
        assert_eq!(record.height, 62.0);
        assert_eq!(record.encode(), row);
    }

    #[test]
    fn empty_text_fields_use_the_sentinel() {
        let record = OverstoryRecord {
            dbh: 10.0,
            height: 40.0,
            ..Default::default()
        };
        assert_eq!(record.encode(), "N/A,N/A,Live,10,40");

        let reparsed =
            OverstoryRecord::decode(&record.encode().split(',').collect::<Vec<_>>()).unwrap();
        assert_eq!(reparsed.tree_id, "");
        assert_eq!(reparsed.species, "");
    }

    #[test]
    fn status_matching_is_case_and_spacing_insensitive() {
        assert_eq!(
            TreeStatus::from_display("dead downed"),
            Some(TreeStatus::DeadDowned)
        );
        assert_eq!(
            TreeStatus::from_display("DEAD_DOWNED"),
            Some(TreeStatus::DeadDowned)
        );
        assert_eq!(TreeStatus::from_display("felled"), None);
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = OverstoryRecord::decode(&["T1", "Oak", "Live", "10"]).unwrap_err();
        assert!(matches!(err, RecordError::ColumnCount { expected: 5, .. }));
    }

    #[test]
    fn rejects_unparseable_dbh() {
        let err = OverstoryRecord::decode(&["T1", "Oak", "Live", "ten", "40"]).unwrap_err();
        assert_eq!(err, RecordError::InvalidNumber("ten".to_string()));
    }

    #[test]
    fn decode_assigns_fresh_ids() {
        let tokens = ["T1", "Oak", "Live", "10", "40"];
        let a = OverstoryRecord::decode(&tokens).unwrap();
        let b = OverstoryRecord::decode(&tokens).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
