use crate::domain::{
    form::{Form, FormKind, PlotForm},
    records::{
        DebrisRecord, InvasiveRecord, OverstoryRecord, PhenologyRecord, SaplingRecord,
        SeedlingRecord, SnagRecord, TreeHealthRecord, WildlifeRecord, HARDWOOD_PHENOPHASES,
        SOFTWOOD_PHENOPHASES,
    },
    Location,
};

/// One surveyed sample location and its ten data forms.
///
/// The form set is fixed by construction: exactly one form per
/// [`FormKind`], no omissions, no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    /// Free-text plot identifier, also the export directory name.
    pub plot_id: String,
    /// Plot center. Required, unlike per-form locations.
    pub location: Location,
    /// Overstory trees.
    pub overstory: Form<OverstoryRecord>,
    /// Standing dead trees.
    pub snags: Form<SnagRecord>,
    /// Wildlife signs and sightings.
    pub wildlife: Form<WildlifeRecord>,
    /// Hardwood phenophases.
    pub hardwood_phenology: Form<PhenologyRecord>,
    /// Softwood phenophases.
    pub softwood_phenology: Form<PhenologyRecord>,
    /// Invasive species occurrences.
    pub invasive_species: Form<InvasiveRecord>,
    /// Tree health assessments.
    pub tree_health: Form<TreeHealthRecord>,
    /// Sapling tallies.
    pub saplings: Form<SaplingRecord>,
    /// Seedling tallies.
    pub seedlings: Form<SeedlingRecord>,
    /// Coarse woody debris.
    pub debris: Form<DebrisRecord>,
}

impl Plot {
    /// Creates an empty plot: dynamic forms start with no rows, fixed-row
    /// forms start with their blank default row sets.
    #[must_use]
    pub fn new(plot_id: impl Into<String>, location: Location) -> Self {
        Self {
            plot_id: plot_id.into(),
            location,
            overstory: Form::new(Vec::new()),
            snags: Form::new(Vec::new()),
            wildlife: Form::new(WildlifeRecord::default_rows()),
            hardwood_phenology: Form::new(PhenologyRecord::default_rows(&HARDWOOD_PHENOPHASES)),
            softwood_phenology: Form::new(PhenologyRecord::default_rows(&SOFTWOOD_PHENOPHASES)),
            invasive_species: Form::new(Vec::new()),
            tree_health: Form::new(Vec::new()),
            saplings: Form::new(Vec::new()),
            seedlings: Form::new(Vec::new()),
            debris: Form::new(Vec::new()),
        }
    }

    /// Assembles a plot from a list of decoded forms.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError`] unless the list holds exactly one form of every
    /// kind.
    pub fn from_forms(
        plot_id: impl Into<String>,
        location: Location,
        forms: Vec<PlotForm>,
    ) -> Result<Self, PlotError> {
        let mut slots = FormSlots::default();
        for form in forms {
            slots.place(form)?;
        }

        let take = PlotError::MissingForm;
        Ok(Self {
            plot_id: plot_id.into(),
            location,
            overstory: slots.overstory.ok_or(take(FormKind::Overstory))?,
            snags: slots.snags.ok_or(take(FormKind::Snags))?,
            wildlife: slots.wildlife.ok_or(take(FormKind::Wildlife))?,
            hardwood_phenology: slots
                .hardwood_phenology
                .ok_or(take(FormKind::HardwoodPhenology))?,
            softwood_phenology: slots
                .softwood_phenology
                .ok_or(take(FormKind::SoftwoodPhenology))?,
            invasive_species: slots
                .invasive_species
                .ok_or(take(FormKind::InvasiveSpecies))?,
            tree_health: slots.tree_health.ok_or(take(FormKind::TreeHealth))?,
            saplings: slots.saplings.ok_or(take(FormKind::Saplings))?,
            seedlings: slots.seedlings.ok_or(take(FormKind::Seedlings))?,
            debris: slots.debris.ok_or(take(FormKind::Debris))?,
        })
    }

    /// Sets the steward name on every form.
    pub fn set_steward(&mut self, steward: &str) {
        self.overstory.steward = steward.to_string();
        self.snags.steward = steward.to_string();
        self.wildlife.steward = steward.to_string();
        self.hardwood_phenology.steward = steward.to_string();
        self.softwood_phenology.steward = steward.to_string();
        self.invasive_species.steward = steward.to_string();
        self.tree_health.steward = steward.to_string();
        self.saplings.steward = steward.to_string();
        self.seedlings.steward = steward.to_string();
        self.debris.steward = steward.to_string();
    }

    /// Row counts per kind, in on-disk order.
    #[must_use]
    pub fn record_counts(&self) -> [(FormKind, usize); 10] {
        [
            (FormKind::Overstory, self.overstory.len()),
            (FormKind::Snags, self.snags.len()),
            (FormKind::Wildlife, self.wildlife.len()),
            (FormKind::HardwoodPhenology, self.hardwood_phenology.len()),
            (FormKind::SoftwoodPhenology, self.softwood_phenology.len()),
            (FormKind::InvasiveSpecies, self.invasive_species.len()),
            (FormKind::TreeHealth, self.tree_health.len()),
            (FormKind::Saplings, self.saplings.len()),
            (FormKind::Seedlings, self.seedlings.len()),
            (FormKind::Debris, self.debris.len()),
        ]
    }
}

/// Accumulator for [`Plot::from_forms`]: one optional slot per kind.
#[derive(Default)]
struct FormSlots {
    overstory: Option<Form<OverstoryRecord>>,
    snags: Option<Form<SnagRecord>>,
    wildlife: Option<Form<WildlifeRecord>>,
    hardwood_phenology: Option<Form<PhenologyRecord>>,
    softwood_phenology: Option<Form<PhenologyRecord>>,
    invasive_species: Option<Form<InvasiveRecord>>,
    tree_health: Option<Form<TreeHealthRecord>>,
    saplings: Option<Form<SaplingRecord>>,
    seedlings: Option<Form<SeedlingRecord>>,
    debris: Option<Form<DebrisRecord>>,
}

impl FormSlots {
    fn place(&mut self, form: PlotForm) -> Result<(), PlotError> {
        let kind = form.kind();
        let occupied = match form {
            PlotForm::Overstory(form) => self.overstory.replace(form).is_some(),
            PlotForm::Snags(form) => self.snags.replace(form).is_some(),
            PlotForm::Wildlife(form) => self.wildlife.replace(form).is_some(),
            PlotForm::HardwoodPhenology(form) => self.hardwood_phenology.replace(form).is_some(),
            PlotForm::SoftwoodPhenology(form) => self.softwood_phenology.replace(form).is_some(),
            PlotForm::InvasiveSpecies(form) => self.invasive_species.replace(form).is_some(),
            PlotForm::TreeHealth(form) => self.tree_health.replace(form).is_some(),
            PlotForm::Saplings(form) => self.saplings.replace(form).is_some(),
            PlotForm::Seedlings(form) => self.seedlings.replace(form).is_some(),
            PlotForm::Debris(form) => self.debris.replace(form).is_some(),
        };

        if occupied {
            Err(PlotError::DuplicateForm(kind))
        } else {
            Ok(())
        }
    }
}

/// Errors produced while assembling a plot from a form list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlotError {
    /// No form of the named kind was provided.
    #[error("no {0} form was provided")]
    MissingForm(FormKind),
    /// More than one form of the named kind was provided.
    #[error("more than one {0} form was provided")]
    DuplicateForm(FormKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location {
        Location::new(44.5, -72.75)
    }

    fn full_form_set() -> Vec<PlotForm> {
        vec![
            PlotForm::Overstory(Form::new(Vec::new())),
            PlotForm::Snags(Form::new(Vec::new())),
            PlotForm::Wildlife(Form::new(WildlifeRecord::default_rows())),
            PlotForm::HardwoodPhenology(Form::new(PhenologyRecord::default_rows(
                &HARDWOOD_PHENOPHASES,
            ))),
            PlotForm::SoftwoodPhenology(Form::new(PhenologyRecord::default_rows(
                &SOFTWOOD_PHENOPHASES,
            ))),
            PlotForm::InvasiveSpecies(Form::new(Vec::new())),
            PlotForm::TreeHealth(Form::new(Vec::new())),
            PlotForm::Saplings(Form::new(Vec::new())),
            PlotForm::Seedlings(Form::new(Vec::new())),
            PlotForm::Debris(Form::new(Vec::new())),
        ]
    }

    #[test]
    fn new_plots_seed_the_fixed_row_sets() {
        let plot = Plot::new("P10", location());
        assert!(plot.overstory.is_empty());
        assert_eq!(plot.wildlife.len(), 7);
        assert_eq!(plot.hardwood_phenology.len(), 11);
        assert_eq!(plot.softwood_phenology.len(), 7);
        assert!(plot.debris.is_empty());
    }

    #[test]
    fn from_forms_accepts_exactly_one_of_each_kind() {
        let plot = Plot::from_forms("P10", location(), full_form_set()).unwrap();
        assert_eq!(plot.plot_id, "P10");
        assert_eq!(plot.wildlife.len(), 7);
    }

    #[test]
    fn from_forms_rejects_a_missing_kind() {
        let forms = full_form_set()
            .into_iter()
            .filter(|form| form.kind() != FormKind::Saplings)
            .collect();
        let err = Plot::from_forms("P10", location(), forms).unwrap_err();
        assert_eq!(err, PlotError::MissingForm(FormKind::Saplings));
    }

    #[test]
    fn from_forms_rejects_a_duplicate_kind() {
        let mut forms = full_form_set();
        forms.push(PlotForm::Debris(Form::new(Vec::new())));
        let err = Plot::from_forms("P10", location(), forms).unwrap_err();
        assert_eq!(err, PlotError::DuplicateForm(FormKind::Debris));
    }

    #[test]
    fn set_steward_reaches_every_form() {
        let mut plot = Plot::new("P10", location());
        plot.set_steward("R. Ames");
        assert_eq!(plot.overstory.steward, "R. Ames");
        assert_eq!(plot.debris.steward, "R. Ames");
    }
}
