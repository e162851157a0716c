use uuid::Uuid;

use crate::domain::{
    codec::{canonical_token, display_token, empty_string, fill_string},
    record::{check_columns, Record, RecordError},
};

/// Observed signs and sightings for one animal class.
///
/// Columns: `animalClass, signs, sightings`. The wildlife form carries a
/// fixed row set, exactly one row per [`AnimalClass`], updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildlifeRecord {
    id: Uuid,
    /// The animal class this row describes.
    pub animal_class: AnimalClass,
    /// Free-text notes on indirect signs (tracks, scat, nests).
    pub signs: String,
    /// Free-text notes on direct sightings.
    pub sightings: String,
}

/// The fixed set of animal classes surveyed on every plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimalClass {
    /// Mammals.
    Mammals,
    /// Birds.
    Birds,
    /// Reptiles.
    Reptiles,
    /// Amphibians.
    Amphibians,
    /// Spiders.
    Spiders,
    /// Insects.
    Insects,
    /// Anything not covered by the other classes.
    #[default]
    Other,
}

impl AnimalClass {
    /// All classes, in the fixed row order of the form.
    pub const ALL: [Self; 7] = [
        Self::Mammals,
        Self::Birds,
        Self::Reptiles,
        Self::Amphibians,
        Self::Spiders,
        Self::Insects,
        Self::Other,
    ];

    /// The canonical lowercase token for this class.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mammals => "mammals",
            Self::Birds => "birds",
            Self::Reptiles => "reptiles",
            Self::Amphibians => "amphibians",
            Self::Spiders => "spiders",
            Self::Insects => "insects",
            Self::Other => "other",
        }
    }

    /// Matches a display or canonical form against the known classes.
    #[must_use]
    pub fn from_display(s: &str) -> Option<Self> {
        let token = canonical_token(&empty_string(s));
        Self::ALL.into_iter().find(|class| class.token() == token)
    }
}

impl WildlifeRecord {
    /// Creates the blank row for one animal class.
    #[must_use]
    pub fn new(animal_class: AnimalClass) -> Self {
        Self {
            id: Uuid::new_v4(),
            animal_class,
            signs: String::new(),
            sightings: String::new(),
        }
    }

    /// The fixed default row set: one blank row per animal class.
    #[must_use]
    pub fn default_rows() -> Vec<Self> {
        AnimalClass::ALL.into_iter().map(Self::new).collect()
    }
}

impl Record for WildlifeRecord {
    const COLUMNS: usize = 3;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        let animal_class = AnimalClass::from_display(tokens[0])
            .ok_or_else(|| RecordError::UnknownValue(tokens[0].to_string()))?;

        Ok(Self {
            id: Uuid::new_v4(),
            animal_class,
            signs: empty_string(tokens[1]),
            sightings: empty_string(tokens[2]),
        })
    }

    fn encode(&self) -> String {
        format!(
            "{},{},{}",
            display_token(self.animal_class.token()),
            fill_string(&self.signs),
            fill_string(&self.sightings)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_columns_decode_to_empty_text() {
        // "Birds,,N/A": a bare empty token and the sentinel both mean empty.
        let record = WildlifeRecord::decode(&["Birds", "", "N/A"]).unwrap();
        assert_eq!(record.animal_class, AnimalClass::Birds);
        assert_eq!(record.signs, "");
        assert_eq!(record.sightings, "");

        // Re-encoding normalizes both to the sentinel.
        assert_eq!(record.encode(), "Birds,N/A,N/A");
    }

    #[test]
    fn commas_in_notes_become_dashes() {
        let mut record = WildlifeRecord::new(AnimalClass::Mammals);
        record.signs = "scat, tracks".to_string();
        assert_eq!(record.encode(), "Mammals,scat- tracks,N/A");
    }

    #[test]
    fn default_rows_cover_every_class_once() {
        let rows = WildlifeRecord::default_rows();
        assert_eq!(rows.len(), AnimalClass::ALL.len());
        for (row, class) in rows.iter().zip(AnimalClass::ALL) {
            assert_eq!(row.animal_class, class);
        }
    }

    #[test]
    fn rejects_unknown_classes() {
        let err = WildlifeRecord::decode(&["Fish", "", ""]).unwrap_err();
        assert_eq!(err, RecordError::UnknownValue("Fish".to_string()));
    }
}
