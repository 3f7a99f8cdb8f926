//! SQLite-based activity log.
//!
//! Provides persistent storage for:
//! - Foreground activity samples (title + classified kind), the raw input
//!   for signal derivation
//! - A key-value store for small host state (e.g. the watch loop's marker)

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::context::detector::{classify, ActivityKind};
use crate::error::DatabaseError;

/// One stored activity sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub id: i64,
    pub observed_at: DateTime<Utc>,
    pub title: String,
    pub kind: ActivityKind,
}

/// SQLite database for the activity log.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/clarvu/clarvu.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, DatabaseError> {
        let path = data_dir()
            .map_err(|e| DatabaseError::OpenFailed {
                path: "~/.config/clarvu".into(),
                source: rusqlite::Error::InvalidPath(e.to_string().into()),
            })?
            .join("clarvu.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS activity_samples (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    observed_at TEXT NOT NULL,
                    title       TEXT NOT NULL,
                    kind        TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_samples_observed_at
                    ON activity_samples(observed_at);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    /// Record an activity sample, classifying the title on the way in.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_sample(
        &self,
        observed_at: DateTime<Utc>,
        title: &str,
    ) -> Result<SampleRecord, DatabaseError> {
        let kind = classify(title).kind;
        self.conn.execute(
            "INSERT INTO activity_samples (observed_at, title, kind) VALUES (?1, ?2, ?3)",
            params![observed_at.to_rfc3339(), title, kind.as_str()],
        )?;
        Ok(SampleRecord {
            id: self.conn.last_insert_rowid(),
            observed_at,
            title: title.to_string(),
            kind,
        })
    }

    /// Samples observed at or after `cutoff`, oldest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn samples_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<SampleRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, observed_at, title, kind FROM activity_samples
             WHERE observed_at >= ?1 ORDER BY observed_at ASC",
        )?;
        let rows = stmt.query_map(params![cutoff.to_rfc3339()], |row| {
            let observed_at: String = row.get(1)?;
            let kind: String = row.get(3)?;
            Ok(SampleRecord {
                id: row.get(0)?,
                observed_at: DateTime::parse_from_rfc3339(&observed_at)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_default(),
                title: row.get(2)?,
                kind: ActivityKind::from_str_lossy(&kind),
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete samples observed before `cutoff`. Returns the number removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub fn prune_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DatabaseError> {
        self.conn
            .execute(
                "DELETE FROM activity_samples WHERE observed_at < ?1",
                params![cutoff.to_rfc3339()],
            )
            .map_err(Into::into)
    }

    /// Read a key from the kv store.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Write a key to the kv store.
    ///
    /// # Errors
    /// Returns an error if the upsert fails.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
