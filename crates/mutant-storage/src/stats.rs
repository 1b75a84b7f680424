//! Aggregate statistics over the counters table.

use mutant_core::errors::StorageError;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::queries::counters;
use crate::queries::samples::SampleKind;

/// Current counts and ratios. Ratios are rounded to two decimals and are
/// `0.0` while nothing has been recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub count_mutant_dna: i64,
    pub count_human_dna: i64,
    pub mutants_ratio: f64,
    pub humans_ratio: f64,
}

impl Stats {
    /// Build stats from raw counts. `total` is the sum over all counters.
    pub fn from_counts(mutants: i64, humans: i64, total: i64) -> Self {
        Self {
            count_mutant_dna: mutants,
            count_human_dna: humans,
            mutants_ratio: ratio(mutants, total),
            humans_ratio: ratio(humans, total),
        }
    }

    pub fn total(&self) -> i64 {
        self.count_mutant_dna + self.count_human_dna
    }
}

/// Read counters and derive ratios.
pub fn load_stats(conn: &Connection) -> Result<Stats, StorageError> {
    let mutants = counters::get(conn, SampleKind::Mutant)?;
    let humans = counters::get(conn, SampleKind::Human)?;
    let total = counters::total(conn)?;
    Ok(Stats::from_counts(mutants, humans, total))
}

/// `part / total` rounded to two decimals; 0 when `total` is not positive.
pub fn ratio(part: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0).round() / 100.0
}
