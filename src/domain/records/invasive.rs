use uuid::Uuid;

use crate::domain::{
    codec::{empty_string, fill_string, format_decimal},
    record::{check_columns, parse_number, DynamicRows, Record, RecordError},
};

/// One invasive-species occurrence, located by bearing and distance from
/// plot center.
///
/// Columns: `species, direction, distance, heightClass, area`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvasiveRecord {
    id: Uuid,
    /// Common species name.
    pub species: String,
    /// Compass bearing from plot center, in degrees.
    pub direction_degrees: f64,
    /// Distance from plot center, in feet.
    pub distance_feet: f64,
    /// Height class, 1 through 4.
    pub height_class: u8,
    /// Infested area, in square feet.
    pub area_sqft: f64,
}

impl Default for InvasiveRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            species: String::new(),
            direction_degrees: 0.0,
            distance_feet: 0.0,
            height_class: 1,
            area_sqft: 0.0,
        }
    }
}

impl Record for InvasiveRecord {
    const COLUMNS: usize = 5;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        let height_class: u8 = parse_number(tokens[3])?;
        if !(1..=4).contains(&height_class) {
            return Err(RecordError::UnknownValue(tokens[3].to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            species: empty_string(tokens[0]),
            direction_degrees: parse_number(tokens[1])?,
            distance_feet: parse_number(tokens[2])?,
            height_class,
            area_sqft: parse_number(tokens[4])?,
        })
    }

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{}",
            fill_string(&self.species),
            format_decimal(self.direction_degrees),
            format_decimal(self.distance_feet),
            self.height_class,
            format_decimal(self.area_sqft)
        )
    }
}

impl DynamicRows for InvasiveRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_full_row() {
        let row = "Japanese Barberry,135,22.5,2,40";
        let record = InvasiveRecord::decode(&row.split(',').collect::<Vec<_>>()).unwrap();

        assert_eq!(record.species, "Japanese Barberry");
        assert_eq!(record.direction_degrees, 135.0);
        assert_eq!(record.distance_feet, 22.5);
        assert_eq!(record.height_class, 2);
        assert_eq!(record.area_sqft, 40.0);
        assert_eq!(record.encode(), row);
    }

    #[test]
    fn rejects_height_classes_outside_range() {
        for bad in ["0", "5"] {
            let err = InvasiveRecord::decode(&["Buckthorn", "0", "0", bad, "0"]).unwrap_err();
            assert_eq!(err, RecordError::UnknownValue(bad.to_string()));
        }
    }

    #[test]
    fn rejects_fractional_height_class() {
        let err = InvasiveRecord::decode(&["Buckthorn", "0", "0", "2.5", "0"]).unwrap_err();
        assert_eq!(err, RecordError::InvalidNumber("2.5".to_string()));
    }
}
