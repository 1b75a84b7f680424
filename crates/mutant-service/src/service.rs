//! MutantService: classifier + storage behind check / stats / purge.
//!
//! The classifier is stateless and `DatabaseManager` serializes its own
//! writes, so the service is `Send + Sync` and can sit behind an `Arc`.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use mutant_core::config::MutantConfig;
use mutant_core::constants::DEFAULT_PURGE_BATCH_SIZE;
use mutant_core::errors::{MutantErrorCode, ServiceError};
use mutant_core::{Classifier, ClassifierSettings, Grid};
use mutant_storage::queries::samples::{self, SampleRow};
use mutant_storage::stats::load_stats;
use mutant_storage::{purge_all, DatabaseManager, PurgeReport, SampleKind, Stats};

use crate::outcome::CheckOutcome;
use crate::request::DnaRequest;

pub struct MutantService {
    classifier: Classifier,
    db: DatabaseManager,
    purge_batch_size: usize,
}

impl MutantService {
    pub fn new(classifier: Classifier, db: DatabaseManager, purge_batch_size: usize) -> Self {
        Self {
            classifier,
            db,
            purge_batch_size,
        }
    }

    /// Build from resolved configuration. Relative database paths resolve
    /// against `root`.
    pub fn from_config(config: &MutantConfig, root: &Path) -> Result<Self, ServiceError> {
        let db_path = config.storage.effective_db_path(root);
        let db = DatabaseManager::open(&db_path, config.storage.effective_read_pool_size())?;
        tracing::info!(
            db = %db_path.display(),
            run_length = config.classifier.effective_run_length(),
            quota = config.classifier.effective_quota(),
            directions = %config.classifier.effective_directions(),
            "service ready"
        );
        Ok(Self::new(
            Classifier::new(config.classifier.settings()),
            db,
            config.storage.effective_purge_batch_size(),
        ))
    }

    /// Service over an in-memory database.
    pub fn in_memory(settings: ClassifierSettings) -> Result<Self, ServiceError> {
        let db = DatabaseManager::open_in_memory()?;
        Ok(Self::new(
            Classifier::new(settings),
            db,
            DEFAULT_PURGE_BATCH_SIZE,
        ))
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// Decode a JSON body, classify it, and record the verdict.
    pub fn check(&self, body: &str) -> CheckOutcome {
        match DnaRequest::from_json(body) {
            Ok(req) => self.check_rows(&req.dna),
            Err(e) => {
                tracing::info!(code = e.error_code(), error = %e, "request rejected");
                CheckOutcome::rejected(&e)
            }
        }
    }

    /// Classify already decoded rows and record the verdict.
    pub fn check_rows<S: AsRef<str>>(&self, rows: &[S]) -> CheckOutcome {
        let grid = match self.classifier.validate(rows) {
            Ok(grid) => grid,
            Err(e) => {
                tracing::info!(error = %e, "grid rejected");
                return CheckOutcome::unprocessable(&e);
            }
        };

        let is_mutant = self.classifier.classify_grid(&grid);
        let kind = SampleKind::from_verdict(is_mutant);
        // The verdict stands even if it cannot be stored.
        if let Err(e) = self.record(&grid, kind) {
            tracing::error!(code = e.error_code(), error = %e, kind = %kind, "failed to record sample");
        }
        tracing::info!(dim = grid.dim(), kind = %kind, "grid classified");
        CheckOutcome::from_verdict(is_mutant)
    }

    fn record(&self, grid: &Grid, kind: SampleKind) -> Result<i64, ServiceError> {
        let dna = grid.joined();
        let now = unix_now();
        Ok(self
            .db
            .with_writer(|conn| samples::record(conn, &dna, kind, now))?)
    }

    /// Current counts and ratios.
    pub fn stats(&self) -> Result<Stats, ServiceError> {
        Ok(self.db.with_reader(load_stats)?)
    }

    /// Most recent stored samples, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<SampleRow>, ServiceError> {
        Ok(self.db.with_reader(|conn| samples::query_recent(conn, limit))?)
    }

    /// Delete every sample and counter in bounded batches, then checkpoint.
    pub fn purge(&self) -> Result<PurgeReport, ServiceError> {
        let report = self
            .db
            .with_writer(|conn| purge_all(conn, self.purge_batch_size))?;
        if let Err(e) = self.db.checkpoint() {
            tracing::warn!(error = %e, "checkpoint after purge failed");
        }
        tracing::info!(
            deleted = report.total_deleted,
            batches = report.batches,
            duration_ms = report.duration_ms,
            "purge served"
        );
        Ok(report)
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
