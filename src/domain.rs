//! The survey data model: primitive text codecs, the ten record schemas,
//! the generic form envelope, and the plot aggregate.

pub mod codec;
mod config;
mod form;
mod location;
mod plot;
mod record;
pub mod records;

pub use config::{Config, ConfigError};
pub use form::{Form, FormKind, PlotForm};
pub use location::{Location, LocationError};
pub use plot::{Plot, PlotError};
pub use record::{DynamicRows, Record, RecordError};
