//! Testing infrastructure for mjreport.
//!
//! - `fixtures`: sample response records, in memory and on disk
//! - `world`: isolated temp directory for running the `mjreport` binary
//! - `assertions`: checks on rendered report text

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::SampleFiles;
pub use world::TestWorld;
