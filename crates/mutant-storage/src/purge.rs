//! Bulk deletion of every sample and counter.
//!
//! Rows are deleted in key-ordered batches of at most `batch_size`, each in
//! its own IMMEDIATE transaction, so no single statement touches more rows
//! than the batch bound. Counters go first, then samples. Purging an empty
//! store succeeds with nothing deleted.

use std::time::Instant;

use mutant_core::errors::StorageError;
use rusqlite::{params, Connection};
use serde::Serialize;

use crate::connection::writer::with_immediate_transaction;
use crate::pagination::fetch_key_page;

/// Tables purged, in order.
pub const PURGE_ORDER: [&str; 2] = ["counters", "samples"];

/// Report of what was deleted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeReport {
    pub total_deleted: u64,
    pub per_table: Vec<TableCleanup>,
    pub batches: u64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableCleanup {
    pub table: String,
    pub deleted: u64,
}

/// Delete everything, `batch_size` rows at a time (a size of 0 is treated as 1).
pub fn purge_all(conn: &Connection, batch_size: usize) -> Result<PurgeReport, StorageError> {
    let start = Instant::now();
    let batch_size = batch_size.max(1);
    let mut report = PurgeReport::default();

    for table in PURGE_ORDER {
        purge_table(conn, table, batch_size, &mut report)?;
    }

    report.duration_ms = start.elapsed().as_millis() as u64;
    report.total_deleted = report.per_table.iter().map(|t| t.deleted).sum();
    tracing::info!(
        total_deleted = report.total_deleted,
        batches = report.batches,
        duration_ms = report.duration_ms,
        "purge complete"
    );
    Ok(report)
}

fn purge_table(
    conn: &Connection,
    table: &str,
    batch_size: usize,
    report: &mut PurgeReport,
) -> Result<(), StorageError> {
    let mut deleted_total = 0u64;
    let mut cursor = None;

    loop {
        let page = fetch_key_page(conn, table, cursor, batch_size)?;
        let (Some(first), Some(last)) = (page.first(), page.last()) else {
            break;
        };

        // Ids between the page bounds are exactly the page: ids only grow.
        let sql = format!("DELETE FROM {table} WHERE id BETWEEN ?1 AND ?2");
        let deleted = with_immediate_transaction(conn, |tx| {
            tx.execute(&sql, params![first, last])
                .map_err(|e| StorageError::SqliteError {
                    message: format!("{table}: {e}"),
                })
        })? as u64;

        tracing::debug!(table, fetched = page.len(), deleted, "purged batch");
        deleted_total += deleted;
        report.batches += 1;
        cursor = Some(last);
    }

    if deleted_total > 0 {
        report.per_table.push(TableCleanup {
            table: table.to_string(),
            deleted: deleted_total,
        });
    }
    Ok(())
}
