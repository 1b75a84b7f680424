//! Request body decoding.

use mutant_core::errors::ServiceError;
use serde::{Deserialize, Serialize};

/// Body of a check request: `{"dna": ["ATGC", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaRequest {
    pub dna: Vec<String>,
}

impl DnaRequest {
    /// Decode a JSON body. Unknown fields are ignored; a missing `dna` field
    /// or a non-string row is an `InvalidRequest`.
    pub fn from_json(body: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(body).map_err(|e| ServiceError::InvalidRequest {
            message: e.to_string(),
        })
    }
}
