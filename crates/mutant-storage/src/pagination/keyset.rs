//! Keyset cursor pagination: no OFFSET, constant-time page retrieval
//! regardless of position.

use mutant_core::errors::StorageError;
use rusqlite::{params, Connection};

/// One page of primary keys, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPage {
    pub ids: Vec<i64>,
}

impl KeyPage {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn first(&self) -> Option<i64> {
        self.ids.first().copied()
    }

    /// Cursor for the next page.
    pub fn last(&self) -> Option<i64> {
        self.ids.last().copied()
    }
}

/// Fetch up to `limit` ids from `table` strictly after `after`.
///
/// `table` must be a name hardcoded by the caller; it is interpolated.
pub fn fetch_key_page(
    conn: &Connection,
    table: &str,
    after: Option<i64>,
    limit: usize,
) -> Result<KeyPage, StorageError> {
    let sql = format!("SELECT id FROM {table} WHERE id > ?1 ORDER BY id LIMIT ?2");
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| StorageError::SqliteError {
            message: format!("{table}: {e}"),
        })?;

    let ids = stmt
        .query_map(params![after.unwrap_or(i64::MIN), limit as i64], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: format!("{table}: {e}"),
        })?
        .collect::<Result<Vec<i64>, _>>()
        .map_err(|e| StorageError::SqliteError {
            message: format!("{table}: {e}"),
        })?;

    Ok(KeyPage { ids })
}
