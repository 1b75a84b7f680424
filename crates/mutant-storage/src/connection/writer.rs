//! Write connection utilities: BEGIN IMMEDIATE transactions.

use mutant_core::errors::StorageError;
use rusqlite::{Connection, ErrorCode, Transaction, TransactionBehavior};

/// Execute a write operation inside a BEGIN IMMEDIATE transaction.
/// The write lock is taken up front, so a busy database fails here
/// with `DbBusy` instead of midway through the closure.
/// Dropping the transaction on an error path rolls it back.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(|e| {
        match e.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StorageError::DbBusy,
            _ => StorageError::SqliteError {
                message: format!("failed to begin immediate transaction: {e}"),
            },
        }
    })?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("failed to commit: {e}"),
    })?;

    Ok(result)
}
