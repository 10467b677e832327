// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use std::path::Path;

use tokio_rusqlite::Connection;
use tracing::debug;

use reviewsync_core::ReviewSyncError;

/// Convert a tokio-rusqlite error into the storage error variant.
pub fn map_tr_err(e: tokio_rusqlite::Error) -> ReviewSyncError {
    ReviewSyncError::Storage {
        source: Box::new(e),
    }
}

/// Handle to one SQLite database file.
///
/// `Database` IS the single writer: query modules accept `&Database` and
/// call through `connection().call()`, which serializes every closure on
/// one background thread. This eliminates SQLITE_BUSY errors under
/// concurrent access.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if necessary) the database at `path`, apply
    /// connection PRAGMAs, and run any pending migrations.
    pub async fn open(path: &str) -> Result<Self, ReviewSyncError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ReviewSyncError::Storage {
                    source: Box::new(e),
                })?;
            }
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| ReviewSyncError::Storage {
                source: Box::new(e),
            })?;
        conn.call(|conn| -> Result<(), rusqlite::Error> {
            conn.execute_batch(
                "PRAGMA journal_mode=WAL;
                 PRAGMA synchronous=NORMAL;
                 PRAGMA foreign_keys=ON;
                 PRAGMA busy_timeout=5000;",
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        conn.call(|conn| -> Result<_, rusqlite::Error> {
            Ok(crate::migrations::run_migrations(conn))
        })
        .await
        .map_err(map_tr_err)??;

        debug!(path, "database opened");
        Ok(Self { conn })
    }

    /// The underlying serialized connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Checkpoint the WAL ahead of shutdown.
    pub async fn checkpoint(&self) -> Result<(), ReviewSyncError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_the_file_and_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dir/reviewsync.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        assert!(path.exists());
        db.checkpoint().await.unwrap();
    }

    #[tokio::test]
    async fn open_reports_a_storage_error_for_an_unusable_path() {
        let dir = tempdir().unwrap();
        // A directory is not a database file; SQLite refuses to open it.
        let err = Database::open(dir.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewSyncError::Storage { .. }));
    }

    #[tokio::test]
    async fn open_is_idempotent_across_reopens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reopen.db");
        let path = path.to_str().unwrap();

        // Second open re-runs the migration runner against an already
        // migrated file; refinery must treat this as a no-op.
        drop(Database::open(path).await.unwrap());
        Database::open(path).await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fk.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();

        let result = db
            .connection()
            .call(|conn| -> Result<usize, rusqlite::Error> {
                conn.execute(
                    "INSERT INTO reviews (business_id, author_name, rating, published_at)
                     VALUES (999, 'nobody', 5, '2026-01-01T00:00:00Z')",
                    [],
                )
            })
            .await;
        assert!(result.is_err(), "orphan review must be rejected");
    }
}
