//! Persistence boundaries: the text envelopes, the plot directory layout,
//! and the zip archive stream.

pub mod archive;
pub mod directory;
pub mod envelope;
