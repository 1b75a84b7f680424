//! Error handling for the mutant detector.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod service_error;
pub mod shape_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::MutantErrorCode;
pub use service_error::ServiceError;
pub use shape_error::ShapeError;
pub use storage_error::StorageError;
