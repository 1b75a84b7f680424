//! Scan direction vectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A step along one scanning axis, in (row, column) deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub const RIGHT: Self = Self { d_row: 0, d_col: 1 };
    pub const DOWN: Self = Self { d_row: 1, d_col: 0 };
    pub const DOWN_RIGHT: Self = Self { d_row: 1, d_col: 1 };
    pub const DOWN_LEFT: Self = Self { d_row: 1, d_col: -1 };

    /// Position reached after `steps` moves from `(row, col)`, or `None`
    /// when it falls off the top/left edge. The bottom/right edge is
    /// checked by the grid lookup.
    pub fn step(self, row: usize, col: usize, steps: usize) -> Option<(usize, usize)> {
        let steps = isize::try_from(steps).ok()?;
        let r = isize::try_from(row).ok()? + self.d_row * steps;
        let c = isize::try_from(col).ok()? + self.d_col * steps;
        if r < 0 || c < 0 {
            return None;
        }
        Some((r as usize, c as usize))
    }
}

/// Which four vectors the classifier walks from every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionSet {
    /// Right, down, down-right and down-left: every line through a cell,
    /// each axis scanned once.
    #[default]
    Full,
    /// Right, down, down-right, down-right. Never scans anti-diagonals and
    /// counts each down-right run twice. Reproduces verdicts recorded by
    /// deployments that shipped this vector set.
    Legacy,
}

impl DirectionSet {
    /// The four vectors, in scan order.
    pub fn vectors(self) -> [Direction; 4] {
        match self {
            Self::Full => [
                Direction::RIGHT,
                Direction::DOWN,
                Direction::DOWN_RIGHT,
                Direction::DOWN_LEFT,
            ],
            Self::Legacy => [
                Direction::RIGHT,
                Direction::DOWN,
                Direction::DOWN_RIGHT,
                Direction::DOWN_RIGHT,
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectionSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "legacy" => Ok(Self::Legacy),
            other => Err(ConfigError::InvalidValue {
                field: "classifier.directions".to_string(),
                message: format!("expected \"full\" or \"legacy\", got \"{other}\""),
            }),
        }
    }
}
