//! Validated square grid of symbols.

use crate::constants::ROW_SEPARATOR;
use crate::errors::ShapeError;

/// A non-empty N×N symbol matrix. Only constructible through
/// [`Grid::validate`], so every `Grid` is square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    dim: usize,
}

impl Grid {
    /// Check that `rows` form a non-empty square and take ownership of the
    /// symbols. Row length is counted in `char`s.
    ///
    /// The first offending row is reported; later rows are not inspected.
    /// Storage grows with the rows already accepted, never with the row count.
    pub fn validate<S: AsRef<str>>(rows: &[S]) -> Result<Self, ShapeError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(ShapeError::Empty);
        }

        let mut cells = Vec::new();
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let actual = text.chars().count();
            if actual != dim {
                return Err(ShapeError::NotSquare {
                    row,
                    expected: dim,
                    actual,
                });
            }
            cells.extend(text.chars());
        }

        Ok(Self { cells, dim })
    }

    /// Side length N.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Symbol at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        self.cells.get(row * self.dim + col).copied()
    }

    /// Rows as owned strings, in order.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.dim)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Rows joined with `;`, the stored form of a sample.
    pub fn joined(&self) -> String {
        self.rows().join(&ROW_SEPARATOR.to_string())
    }

    /// Mirror along the main diagonal.
    pub fn transpose(&self) -> Self {
        let n = self.dim;
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..n {
            for row in 0..n {
                cells.push(self.cells[row * n + col]);
            }
        }
        Self { cells, dim: n }
    }
}
