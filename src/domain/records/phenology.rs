use uuid::Uuid;

use crate::domain::{
    codec::{empty_string, fill_string, format_flag, parse_flag},
    record::{check_columns, Record, RecordError},
};

/// Phenophase titles observed on hardwood plots, in fixed row order.
pub const HARDWOOD_PHENOPHASES: [&str; 11] = [
    "Breaking Leaf Buds",
    "Leaves",
    "Increasing Leaf Size",
    "Colored Leaves",
    "Falling Leaves",
    "Flowers or Flower Buds",
    "Open Flowers",
    "Pollen Release",
    "Developing Fruits",
    "Ripe Fruits",
    "Recent Fruits/Seed Drops",
];

/// Phenophase titles observed on softwood plots, in fixed row order.
pub const SOFTWOOD_PHENOPHASES: [&str; 7] = [
    "Breaking Needle Buds",
    "Young Needle",
    "Pollen Cones",
    "Pollen Release",
    "Unripe Seed Cone",
    "Ripe Seed Cone",
    "Recent Cone/Seed Drops",
];

/// One phenophase observation: the phase, whether it is underway, and a note.
///
/// Columns: `phenophase, present, note`. The same schema serves both the
/// hardwood and softwood forms; only the fixed row sets differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhenologyRecord {
    id: Uuid,
    /// Title of the phenophase being observed.
    pub phenophase: String,
    /// Whether the phase is currently underway.
    pub present: bool,
    /// Free-text observation note.
    pub note: String,
}

impl PhenologyRecord {
    /// Creates the blank row for one phenophase.
    #[must_use]
    pub fn new(phenophase: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phenophase: phenophase.into(),
            present: false,
            note: String::new(),
        }
    }

    /// The fixed default row set for a list of phenophase titles.
    #[must_use]
    pub fn default_rows(phenophases: &[&str]) -> Vec<Self> {
        phenophases.iter().copied().map(Self::new).collect()
    }
}

impl Record for PhenologyRecord {
    const COLUMNS: usize = 3;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        Ok(Self {
            id: Uuid::new_v4(),
            phenophase: empty_string(tokens[0]),
            present: parse_flag(tokens[1]),
            note: empty_string(tokens[2]),
        })
    }

    fn encode(&self) -> String {
        format!(
            "{},{},{}",
            fill_string(&self.phenophase),
            format_flag(self.present),
            fill_string(&self.note)
        )
    }
}
