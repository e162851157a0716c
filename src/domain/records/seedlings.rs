use uuid::Uuid;

use crate::domain::{
    codec::{empty_string, fill_string},
    record::{check_columns, parse_number, DynamicRows, Record, RecordError},
};

/// Tallies of seedlings of one species, bucketed by height class.
///
/// Columns: `species, count1, count2, count3, count4`. The same on-disk
/// shape as sapling rows. The quadrant a tally was taken in is a field aid
/// only; it is never written to disk, and imported rows default to north.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedlingRecord {
    id: Uuid,
    /// Quadrant of the plot the tally was taken in. In-memory only.
    pub direction: Quadrant,
    /// Common species name.
    pub species: String,
    /// Tally per height class, ascending.
    pub counts: [u32; 4],
}

/// The cardinal quadrant a seedling tally belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quadrant {
    /// North quadrant.
    #[default]
    North,
    /// East quadrant.
    East,
    /// South quadrant.
    South,
    /// West quadrant.
    West,
}

impl Default for SeedlingRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            direction: Quadrant::default(),
            species: String::new(),
            counts: [0; 4],
        }
    }
}

impl Record for SeedlingRecord {
    const COLUMNS: usize = 5;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        Ok(Self {
            id: Uuid::new_v4(),
            direction: Quadrant::default(),
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

impl DynamicRows for SeedlingRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_full_row() {
        let row = "Eastern Hemlock,12,5,3,0";
        let record = SeedlingRecord::decode(&row.split(',').collect::<Vec<_>>()).unwrap();

        assert_eq!(record.species, "Eastern Hemlock");
        assert_eq!(record.counts, [12, 5, 3, 0]);
        assert_eq!(record.encode(), row);
    }

    #[test]
    fn quadrant_never_reaches_disk() {
        let record = SeedlingRecord {
            direction: Quadrant::West,
            species: "Beech".to_string(),
            counts: [1, 0, 0, 0],
            ..Default::default()
        };
        let encoded = record.encode();
        assert_eq!(encoded, "Beech,1,0,0,0");

        // Imported rows come back in the default quadrant.
        let reparsed = SeedlingRecord::decode(&encoded.split(',').collect::<Vec<_>>()).unwrap();
        assert_eq!(reparsed.direction, Quadrant::North);
    }
}
