use uuid::Uuid;

use crate::domain::{
    codec::{empty_string, fill_string},
    record::{check_columns, parse_number, DynamicRows, Record, RecordError},
};

/// Tallies of saplings of one species, bucketed by diameter class.
///
/// Columns: `species, count1, count2, count3, count4` where the four counts
/// cover the 1" DBH classes from 1 inch up to but not including 5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaplingRecord {
    id: Uuid,
    /// Common species name.
    pub species: String,
    /// Tally per diameter class, ascending.
    pub counts: [u32; 4],
}

impl Default for SaplingRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            species: String::new(),
            counts: [0; 4],
        }
    }
}

impl Record for SaplingRecord {
    const COLUMNS: usize = 5;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        Ok(Self {
            id: Uuid::new_v4(),
            species: empty_string(tokens[0]),
            counts: [
                parse_number(tokens[1])?,
                parse_number(tokens[2])?,
                parse_number(tokens[3])?,
                parse_number(tokens[4])?,
            ],
        })
    }

    fn encode(&self) -> String {
        let [a, b, c, d] = self.counts;
        format!("{},{a},{b},{c},{d}", fill_string(&self.species))
    }
}

impl DynamicRows for SaplingRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_full_row() {
        let row = "Striped Maple,4,2,0,1";
        let record = SaplingRecord::decode(&row.split(',').collect::<Vec<_>>()).unwrap();

        assert_eq!(record.species, "Striped Maple");
        assert_eq!(record.counts, [4, 2, 0, 1]);
        assert_eq!(record.encode(), row);
    }

    #[test]
    fn rejects_non_integer_counts() {
        let err = SaplingRecord::decode(&["Beech", "1", "2.5", "0", "0"]).unwrap_err();
        assert_eq!(err, RecordError::InvalidNumber("2.5".to_string()));
    }

    #[test]
    fn rejects_negative_counts() {
        let err = SaplingRecord::decode(&["Beech", "-1", "0", "0", "0"]).unwrap_err();
        assert_eq!(err, RecordError::InvalidNumber("-1".to_string()));
    }
}
