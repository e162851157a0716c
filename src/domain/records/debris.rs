use uuid::Uuid;

use crate::domain::{
    codec::{empty_string, fill_string, format_decimal},
    record::{check_columns, parse_number, DynamicRows, Record, RecordError},
};

/// The transect bearings walked for coarse woody debris, in degrees.
pub const TRANSECTS: [u16; 3] = [0, 120, 240];

/// One piece of coarse woody debris crossing a transect.
///
/// Columns: `transect, diameter, decayClass, species`.
#[derive(Debug, Clone, PartialEq)]
pub struct DebrisRecord {
    id: Uuid,
    /// Bearing of the transect the piece crosses, one of [`TRANSECTS`].
    pub transect_degrees: u16,
    /// Diameter at the crossing point, in inches.
    pub diameter_inches: f64,
    /// Decay class, 1 through 5.
    pub decay_class: u8,
    /// Common species name, if identifiable.
    pub species: String,
}

impl Default for DebrisRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            transect_degrees: 0,
            diameter_inches: 0.0,
            decay_class: 1,
            species: String::new(),
        }
    }
}

impl Record for DebrisRecord {
    const COLUMNS: usize = 4;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        let transect_degrees: u16 = parse_number(tokens[0])?;
        if !TRANSECTS.contains(&transect_degrees) {
            return Err(RecordError::UnknownValue(tokens[0].to_string()));
        }

        let decay_class: u8 = parse_number(tokens[2])?;
        if !(1..=5).contains(&decay_class) {
            return Err(RecordError::UnknownValue(tokens[2].to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            transect_degrees,
            diameter_inches: parse_number(tokens[1])?,
            decay_class,
            species: empty_string(tokens[3]),
        })
    }

    fn encode(&self) -> String {
        format!(
            "{},{},{},{}",
            self.transect_degrees,
            format_decimal(self.diameter_inches),
            self.decay_class,
            fill_string(&self.species)
        )
    }
}

impl DynamicRows for DebrisRecord {}
