//! mutant-service: the transport-agnostic request facade.
//!
//! `MutantService` owns the classifier and the database manager. Each
//! operation returns a value that carries its own status code, so an HTTP
//! layer, the bundled CLI, or a test can map it without extra logic.

pub mod cli;
pub mod outcome;
pub mod request;
pub mod service;

pub use outcome::CheckOutcome;
pub use request::DnaRequest;
pub use service::MutantService;
