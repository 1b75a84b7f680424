//! Grid shape errors.

use super::error_code::{self, MutantErrorCode};

/// The grid handed to the classifier is not a non-empty square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("grid is empty")]
    Empty,

    #[error("grid is not square: row {row} has {actual} symbols, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl MutantErrorCode for ShapeError {
    fn error_code(&self) -> &'static str {
        error_code::SHAPE_ERROR
    }
}
