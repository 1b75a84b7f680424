//! Queries for the samples table: one row per classified grid.

use std::fmt;
use std::str::FromStr;

use mutant_core::constants::{KIND_HUMAN, KIND_MUTANT};
use mutant_core::errors::StorageError;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::counters;
use crate::connection::writer::with_immediate_transaction;

/// Category a classified grid is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleKind {
    Mutant,
    Human,
}

impl SampleKind {
    pub fn from_verdict(is_mutant: bool) -> Self {
        if is_mutant {
            Self::Mutant
        } else {
            Self::Human
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mutant => KIND_MUTANT,
            Self::Human => KIND_HUMAN,
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KIND_MUTANT => Ok(Self::Mutant),
            KIND_HUMAN => Ok(Self::Human),
            other => Err(StorageError::SqliteError {
                message: format!("unknown sample kind: {other}"),
            }),
        }
    }
}

/// A stored sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRow {
    pub id: i64,
    /// Rows joined with `;`.
    pub dna: String,
    pub kind: SampleKind,
    pub created_at: i64,
}

/// Insert a sample row. Returns the row id. Does not touch counters.
pub fn insert_sample(
    conn: &Connection,
    dna: &str,
    kind: SampleKind,
    created_at: i64,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO samples (dna, kind, created_at) VALUES (?1, ?2, ?3)",
        params![dna, kind.as_str(), created_at],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(conn.last_insert_rowid())
}

/// Insert the sample and bump its category counter atomically.
/// Returns the new sample id.
pub fn record(
    conn: &Connection,
    dna: &str,
    kind: SampleKind,
    created_at: i64,
) -> Result<i64, StorageError> {
    with_immediate_transaction(conn, |tx| {
        let id = insert_sample(tx, dna, kind, created_at)?;
        let count = counters::increment(tx, kind)?;
        tracing::debug!(id, kind = %kind, count, "sample recorded");
        Ok(id)
    })
}

/// Most recent samples first.
pub fn query_recent(conn: &Connection, limit: usize) -> Result<Vec<SampleRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, dna, kind, created_at
             FROM samples ORDER BY created_at DESC, id DESC LIMIT ?1",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut result = Vec::new();
    for row in rows {
        let (id, dna, kind, created_at) =
            row.map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        result.push(SampleRow {
            id,
            dna,
            kind: kind.parse()?,
            created_at,
        });
    }
    Ok(result)
}

/// Count all stored samples.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM samples", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Count stored samples of one kind.
pub fn count_by_kind(conn: &Connection, kind: SampleKind) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM samples WHERE kind = ?1",
        params![kind.as_str()],
        |row| row.get(0),
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
