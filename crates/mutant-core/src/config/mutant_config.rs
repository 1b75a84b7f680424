//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ClassifierConfig, StorageConfig};
use crate::classifier::DirectionSet;
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "mutant.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MUTANT_*`)
/// 3. Project config (`mutant.toml` in project root)
/// 4. User config (`~/.mutant/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MutantConfig {
    pub classifier: ClassifierConfig,
    pub storage: StorageConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub run_length: Option<usize>,
    pub quota: Option<usize>,
    pub directions: Option<DirectionSet>,
    pub db_path: Option<String>,
}

impl MutantConfig {
    /// Load configuration, applying every layer onto compiled defaults.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // User config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MutantConfig) -> Result<(), ConfigError> {
        if config.classifier.run_length == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.run_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.classifier.quota == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.quota".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.storage.purge_batch_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "storage.purge_batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.storage.read_pool_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.mutant/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".mutant").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MutantConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MutantConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut MutantConfig, other: &MutantConfig) {
        if other.classifier.run_length.is_some() {
            base.classifier.run_length = other.classifier.run_length;
        }
        if other.classifier.quota.is_some() {
            base.classifier.quota = other.classifier.quota;
        }
        if other.classifier.directions.is_some() {
            base.classifier.directions = other.classifier.directions;
        }

        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
        if other.storage.purge_batch_size.is_some() {
            base.storage.purge_batch_size = other.storage.purge_batch_size;
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }
    }

    /// Apply environment variable overrides. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut MutantConfig) {
        if let Ok(val) = std::env::var("MUTANT_RUN_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.classifier.run_length = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MUTANT_QUOTA") {
            if let Ok(v) = val.parse::<usize>() {
                config.classifier.quota = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MUTANT_DIRECTIONS") {
            if let Ok(v) = val.parse::<DirectionSet>() {
                config.classifier.directions = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MUTANT_DB_PATH") {
            config.storage.db_path = Some(val);
        }
        if let Ok(val) = std::env::var("MUTANT_PURGE_BATCH_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.purge_batch_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MUTANT_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.read_pool_size = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MutantConfig, cli: &CliOverrides) {
        if let Some(v) = cli.run_length {
            config.classifier.run_length = Some(v);
        }
        if let Some(v) = cli.quota {
            config.classifier.quota = Some(v);
        }
        if let Some(v) = cli.directions {
            config.classifier.directions = Some(v);
        }
        if let Some(ref v) = cli.db_path {
            config.storage.db_path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
