//! Configuration system for the mutant detector.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod classifier_config;
pub mod mutant_config;
pub mod storage_config;

pub use classifier_config::ClassifierConfig;
pub use mutant_config::{CliOverrides, MutantConfig};
pub use storage_config::StorageConfig;
