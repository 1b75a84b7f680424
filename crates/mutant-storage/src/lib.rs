//! mutant-storage: SQLite persistence for classified samples.
//!
//! ## Modules
//! - `connection`: write-serialized + read-pooled `DatabaseManager`.
//! - `migrations`: schema versions tracked in `PRAGMA user_version`.
//! - `queries`: samples and per-category counters.
//! - `pagination`: keyset pages over integer primary keys.
//! - `stats`: counts and ratios.
//! - `purge`: idempotent, batched deletion of everything.

pub mod connection;
pub mod migrations;
pub mod pagination;
pub mod purge;
pub mod queries;
pub mod stats;

pub use connection::DatabaseManager;
pub use purge::{purge_all, PurgeReport};
pub use queries::samples::SampleKind;
pub use stats::Stats;
