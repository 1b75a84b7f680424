//! Outcome of a check request and its status mapping.

use mutant_core::errors::{MutantErrorCode, ServiceError, ShapeError};
use serde::Serialize;

/// What a check request produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum CheckOutcome {
    /// Verdict true. Recorded.
    Mutant,
    /// Verdict false. Recorded.
    Human,
    /// Decoded, but the grid failed shape validation. Not recorded.
    Unprocessable { code: String, message: String },
    /// Body could not be decoded. Not recorded.
    Rejected { code: String, message: String },
}

impl CheckOutcome {
    /// HTTP-style status: 200 mutant, 403 human, 422 bad shape, 412 bad body.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Mutant => 200,
            Self::Human => 403,
            Self::Unprocessable { .. } => 422,
            Self::Rejected { .. } => 412,
        }
    }

    pub fn from_verdict(is_mutant: bool) -> Self {
        if is_mutant {
            Self::Mutant
        } else {
            Self::Human
        }
    }

    /// True when a verdict was reached.
    pub fn is_verdict(&self) -> bool {
        matches!(self, Self::Mutant | Self::Human)
    }

    pub(crate) fn unprocessable(err: &ShapeError) -> Self {
        Self::Unprocessable {
            code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn rejected(err: &ServiceError) -> Self {
        Self::Rejected {
            code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Status for operations that either succeed or fail internally (stats, purge).
pub fn status_for<T>(result: &Result<T, ServiceError>) -> u16 {
    match result {
        Ok(_) => 200,
        Err(ServiceError::InvalidRequest { .. }) => 412,
        Err(ServiceError::Shape(_)) => 422,
        Err(_) => 500,
    }
}
