//! mutant-core: the grid classifier plus the shared errors, configuration,
//! tracing setup and constants used by the storage and service crates.
//!
//! The classifier is a pure function from a grid of symbols to a verdict.
//! It performs no I/O and emits no logs.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use classifier::{Classifier, ClassifierSettings, Direction, DirectionSet, Grid};
pub use errors::ShapeError;
