//! Classifier configuration.

use serde::{Deserialize, Serialize};

use crate::classifier::{ClassifierSettings, DirectionSet};
use crate::constants::{DEFAULT_QUOTA, DEFAULT_RUN_LENGTH};

/// Configuration for the grid classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Length of a qualifying run. Default: 4.
    pub run_length: Option<usize>,
    /// Qualifying runs needed for a mutant verdict. Default: 2.
    pub quota: Option<usize>,
    /// "full" | "legacy". Default: "full".
    pub directions: Option<DirectionSet>,
}

impl ClassifierConfig {
    /// Returns the effective run length, defaulting to 4.
    pub fn effective_run_length(&self) -> usize {
        self.run_length.unwrap_or(DEFAULT_RUN_LENGTH)
    }

    /// Returns the effective quota, defaulting to 2.
    pub fn effective_quota(&self) -> usize {
        self.quota.unwrap_or(DEFAULT_QUOTA)
    }

    pub fn effective_directions(&self) -> DirectionSet {
        self.directions.unwrap_or_default()
    }

    /// Resolved settings for [`crate::Classifier::new`].
    pub fn settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            run_length: self.effective_run_length(),
            quota: self.effective_quota(),
            directions: self.effective_directions(),
        }
    }
}
