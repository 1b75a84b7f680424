//! Typed queries over the v001 schema.

pub mod counters;
pub mod samples;
