//! The row schemas of the ten survey forms.
//!
//! Each schema is a plain struct implementing [`Record`](crate::domain::Record)
//! for its fixed column layout. Schemas whose forms carry a fixed row set
//! (wildlife and the two phenology forms) expose a `default_rows` constructor
//! and omit the [`DynamicRows`](crate::domain::DynamicRows) marker.

mod debris;
mod invasive;
mod overstory;
mod phenology;
mod saplings;
mod seedlings;
mod snags;
mod tree_health;
mod wildlife;

pub use debris::{DebrisRecord, TRANSECTS};
pub use invasive::InvasiveRecord;
pub use overstory::{OverstoryRecord, TreeStatus};
pub use phenology::{PhenologyRecord, HARDWOOD_PHENOPHASES, SOFTWOOD_PHENOPHASES};
pub use saplings::SaplingRecord;
pub use seedlings::{Quadrant, SeedlingRecord};
pub use snags::{SnagRecord, SnagStatus};
pub use tree_health::{BoleDamage, CrownDamage, DamagePercent, TreeHealthRecord};
pub use wildlife::{AnimalClass, WildlifeRecord};
