//! Run scanning and the mutant verdict.

use serde::{Deserialize, Serialize};

use super::direction::{Direction, DirectionSet};
use super::grid::Grid;
use crate::constants::{DEFAULT_QUOTA, DEFAULT_RUN_LENGTH};
use crate::errors::ShapeError;

/// Thresholds and axes used by a [`Classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierSettings {
    /// Number of equal symbols that make a qualifying run. `0` behaves as `1`.
    pub run_length: usize,
    /// Qualifying runs needed for a mutant verdict. `0` accepts every valid grid.
    pub quota: usize,
    pub directions: DirectionSet,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            run_length: DEFAULT_RUN_LENGTH,
            quota: DEFAULT_QUOTA,
            directions: DirectionSet::Full,
        }
    }
}

/// Decides whether a grid holds at least `quota` runs of `run_length`
/// identical symbols along the configured axes.
///
/// Stateless apart from its settings; share freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    settings: ClassifierSettings,
}

impl Classifier {
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Shape check only.
    pub fn validate<S: AsRef<str>>(&self, rows: &[S]) -> Result<Grid, ShapeError> {
        Grid::validate(rows)
    }

    /// Validate, then scan. No scanning happens on a malformed grid.
    pub fn classify<S: AsRef<str>>(&self, rows: &[S]) -> Result<bool, ShapeError> {
        let grid = self.validate(rows)?;
        Ok(self.classify_grid(&grid))
    }

    /// Verdict for an already validated grid.
    pub fn classify_grid(&self, grid: &Grid) -> bool {
        self.count_runs(grid, self.settings.quota) >= self.settings.quota
    }

    /// Count qualifying runs in row-major order, stopping as soon as
    /// `limit` is reached. Pass `usize::MAX` for a full count.
    pub fn count_runs(&self, grid: &Grid, limit: usize) -> usize {
        let mut found = 0;
        if found >= limit {
            return found;
        }

        let n = grid.dim();
        let vectors = self.settings.directions.vectors();
        for row in 0..n {
            for col in 0..n {
                for dir in vectors {
                    if self.run_starts_at(grid, row, col, dir) {
                        found += 1;
                        if found >= limit {
                            return found;
                        }
                    }
                }
            }
        }
        found
    }

    fn run_starts_at(&self, grid: &Grid, row: usize, col: usize, dir: Direction) -> bool {
        let Some(symbol) = grid.get(row, col) else {
            return false;
        };
        (1..self.settings.run_length).all(|steps| {
            dir.step(row, col, steps)
                .and_then(|(r, c)| grid.get(r, c))
                .is_some_and(|s| s == symbol)
        })
    }
}
