//! Shared constants for the mutant detector.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default length of a qualifying run.
pub const DEFAULT_RUN_LENGTH: usize = 4;

/// Default number of qualifying runs needed for a mutant verdict.
pub const DEFAULT_QUOTA: usize = 2;

/// Symbols of the reference DNA alphabet. The classifier does not enforce it.
pub const DNA_ALPHABET: [char; 4] = ['A', 'T', 'C', 'G'];

/// Separator used when a grid is flattened into a single stored string.
pub const ROW_SEPARATOR: char = ';';

// ---- Storage ----

/// Maximum rows deleted per purge batch.
pub const DEFAULT_PURGE_BATCH_SIZE: usize = 500;

/// Default database file name, relative to the project root.
pub const DEFAULT_DB_FILE: &str = "mutant.db";

/// Default read pool size.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// ---- Category names ----

/// Category recorded for grids that classify as mutant.
pub const KIND_MUTANT: &str = "mutant";

/// Category recorded for grids that classify as human.
pub const KIND_HUMAN: &str = "human";
