use std::fmt;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{
    record::{DynamicRows, Record},
    records::{
        DebrisRecord, InvasiveRecord, OverstoryRecord, PhenologyRecord, SaplingRecord,
        SeedlingRecord, SnagRecord, TreeHealthRecord, WildlifeRecord,
    },
    Location,
};

/// The closed set of form kinds every plot carries, in the fixed order they
/// are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Measured overstory trees.
    Overstory,
    /// Standing dead trees.
    Snags,
    /// Wildlife signs and sightings.
    Wildlife,
    /// Hardwood phenophase observations.
    HardwoodPhenology,
    /// Softwood phenophase observations.
    SoftwoodPhenology,
    /// Invasive species occurrences.
    InvasiveSpecies,
    /// Tree health assessments.
    TreeHealth,
    /// Sapling tallies.
    Saplings,
    /// Seedling tallies.
    Seedlings,
    /// Coarse woody debris transects.
    Debris,
}

impl FormKind {
    /// All ten kinds, in on-disk order.
    pub const ALL: [Self; 10] = [
        Self::Overstory,
        Self::Snags,
        Self::Wildlife,
        Self::HardwoodPhenology,
        Self::SoftwoodPhenology,
        Self::InvasiveSpecies,
        Self::TreeHealth,
        Self::Saplings,
        Self::Seedlings,
        Self::Debris,
    ];

    /// The human-readable name, as written on the last line of a form's
    /// `Info.txt`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Overstory => "Overstory",
            Self::Snags => "Snags",
            Self::Wildlife => "Wildlife",
            Self::HardwoodPhenology => "Hardwood Phenology",
            Self::SoftwoodPhenology => "Softwood Phenology",
            Self::InvasiveSpecies => "Invasive Species",
            Self::TreeHealth => "Tree Health",
            Self::Saplings => "Saplings",
            Self::Seedlings => "Seedlings",
            Self::Debris => "Debris",
        }
    }

    /// The subdirectory name the form's file pair lives under.
    #[must_use]
    pub const fn folder_name(self) -> &'static str {
        match self {
            Self::Overstory => "Overstory",
            Self::Snags => "Snags",
            Self::Wildlife => "Wildlife",
            Self::HardwoodPhenology => "Hardwood_Phenology",
            Self::SoftwoodPhenology => "Softwood_Phenology",
            Self::InvasiveSpecies => "Invasive_Species",
            Self::TreeHealth => "Tree_Health",
            Self::Saplings => "Saplings",
            Self::Seedlings => "Seedlings",
            Self::Debris => "Debris",
        }
    }

    /// Resolves a display name back to its kind.
    #[must_use]
    pub fn from_display_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.display_name() == s)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One form: shared metadata plus an ordered record list.
///
/// The row order is meaningful; it is the line order in `Content.csv`.
/// Row addition and removal are only available for schemas marked
/// [`DynamicRows`]; fixed-row forms (wildlife, phenology) are updated in
/// place through [`Form::record_mut`].
#[derive(Debug, Clone, PartialEq)]
pub struct Form<R> {
    id: Uuid,
    /// Name of the person who filled the form in.
    pub steward: String,
    /// Date the form was filled in.
    pub date: NaiveDate,
    /// Where the form was filled in, if captured.
    pub location: Option<Location>,
    records: Vec<R>,
}

impl<R: Record> Form<R> {
    /// Creates a form dated today with empty metadata and the given rows.
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        Self {
            id: Uuid::new_v4(),
            steward: String::new(),
            date: Utc::now().date_naive(),
            location: None,
            records,
        }
    }

    /// The form's process-local id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The rows, in on-disk order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Looks a row up by its id, for in-place edits.
    pub fn record_mut(&mut self, id: Uuid) -> Option<&mut R> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the form has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record + DynamicRows> Form<R> {
    /// Appends a row.
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Removes the row with the given id, if present.
    pub fn remove(&mut self, id: Uuid) -> Option<R> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }
}

/// One form of any kind. The tag and the record schema always agree.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotForm {
    /// An overstory form.
    Overstory(Form<OverstoryRecord>),
    /// A snags form.
    Snags(Form<SnagRecord>),
    /// A wildlife form.
    Wildlife(Form<WildlifeRecord>),
    /// A hardwood phenology form.
    HardwoodPhenology(Form<PhenologyRecord>),
    /// A softwood phenology form.
    SoftwoodPhenology(Form<PhenologyRecord>),
    /// An invasive species form.
    InvasiveSpecies(Form<InvasiveRecord>),
    /// A tree health form.
    TreeHealth(Form<TreeHealthRecord>),
    /// A saplings form.
    Saplings(Form<SaplingRecord>),
    /// A seedlings form.
    Seedlings(Form<SeedlingRecord>),
    /// A debris form.
    Debris(Form<DebrisRecord>),
}

/// Runs the same expression against whichever `Form<R>` the variant holds.
macro_rules! dispatch {
    ($value:expr, $form:pat => $body:expr) => {
        match $value {
            PlotForm::Overstory($form) => $body,
            PlotForm::Snags($form) => $body,
            PlotForm::Wildlife($form) => $body,
            PlotForm::HardwoodPhenology($form) => $body,
            PlotForm::SoftwoodPhenology($form) => $body,
            PlotForm::InvasiveSpecies($form) => $body,
            PlotForm::TreeHealth($form) => $body,
            PlotForm::Saplings($form) => $body,
            PlotForm::Seedlings($form) => $body,
            PlotForm::Debris($form) => $body,
        }
    };
}

impl PlotForm {
    /// The kind tag of this form.
    #[must_use]
    pub const fn kind(&self) -> FormKind {
        match self {
            Self::Overstory(_) => FormKind::Overstory,
            Self::Snags(_) => FormKind::Snags,
            Self::Wildlife(_) => FormKind::Wildlife,
            Self::HardwoodPhenology(_) => FormKind::HardwoodPhenology,
            Self::SoftwoodPhenology(_) => FormKind::SoftwoodPhenology,
            Self::InvasiveSpecies(_) => FormKind::InvasiveSpecies,
            Self::TreeHealth(_) => FormKind::TreeHealth,
            Self::Saplings(_) => FormKind::Saplings,
            Self::Seedlings(_) => FormKind::Seedlings,
            Self::Debris(_) => FormKind::Debris,
        }
    }

    /// Number of rows in the wrapped form.
    #[must_use]
    pub fn len(&self) -> usize {
        dispatch!(self, form => form.records.len())
    }

    /// Whether the wrapped form has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        dispatch!(self, form => form.records.is_empty())
    }
}
