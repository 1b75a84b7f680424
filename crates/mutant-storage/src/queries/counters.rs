//! Queries for the counters table: one running total per category.

use mutant_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use super::samples::SampleKind;

/// A counter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterRow {
    pub id: i64,
    pub kind: String,
    pub count: i64,
}

/// Add one to the counter for `kind`, creating it at 1 if absent.
pub fn increment(conn: &Connection, kind: SampleKind) -> Result<i64, StorageError> {
    conn.query_row(
        "INSERT INTO counters (kind, count) VALUES (?1, 1)
         ON CONFLICT(kind) DO UPDATE SET count = count + 1
         RETURNING count",
        params![kind.as_str()],
        |row| row.get(0),
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Current count for `kind`; 0 when no sample of that kind was recorded yet.
pub fn get(conn: &Connection, kind: SampleKind) -> Result<i64, StorageError> {
    let count: Option<i64> = conn
        .query_row(
            "SELECT count FROM counters WHERE kind = ?1",
            params![kind.as_str()],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(count.unwrap_or(0))
}

/// Sum of every counter.
pub fn total(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COALESCE(SUM(count), 0) FROM counters", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// All counter rows, in key order.
pub fn all(conn: &Connection) -> Result<Vec<CounterRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id, kind, count FROM counters ORDER BY id")
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(CounterRow {
                id: row.get(0)?,
                kind: row.get(1)?,
                count: row.get(2)?,
            })
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
