//! Service-level errors.

use super::error_code::{self, MutantErrorCode};
use super::{ConfigError, ShapeError, StorageError};

/// Errors surfaced by the request facade.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MutantErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => error_code::INVALID_REQUEST,
            Self::Shape(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
