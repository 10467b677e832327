// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the persistence collaborator traits.

use async_trait::async_trait;
use tracing::debug;

use reviewsync_core::{
    Business, BusinessReader, Collaborator, HealthStatus, NewWidgetRow, Review, ReviewReader,
    ReviewSyncError, WidgetRecord, WidgetStore,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the store at `path`, creating and migrating the database as
    /// needed.
    pub async fn open(path: &str) -> Result<Self, ReviewSyncError> {
        let db = Database::open(path).await?;
        debug!(path, "SQLite store initialized");
        Ok(Self { db })
    }

    /// The underlying database handle, for sync tooling that needs the
    /// write-side query modules directly.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl Collaborator for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, ReviewSyncError> {
        self.db
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ReviewSyncError> {
        self.db.checkpoint().await
    }
}

#[async_trait]
impl WidgetStore for SqliteStore {
    async fn insert_widget(&self, row: &NewWidgetRow) -> Result<WidgetRecord, ReviewSyncError> {
        queries::widgets::insert_widget(&self.db, row).await
    }

    async fn get_widget(&self, id: i64) -> Result<Option<WidgetRecord>, ReviewSyncError> {
        queries::widgets::get_widget(&self.db, id).await
    }

    async fn list_widgets(&self) -> Result<Vec<WidgetRecord>, ReviewSyncError> {
        queries::widgets::list_widgets(&self.db).await
    }

    async fn list_widgets_for_business(
        &self,
        business_id: i64,
    ) -> Result<Vec<WidgetRecord>, ReviewSyncError> {
        queries::widgets::list_widgets_for_business(&self.db, business_id).await
    }

    async fn update_widget(&self, record: &WidgetRecord) -> Result<bool, ReviewSyncError> {
        queries::widgets::update_widget(&self.db, record).await
    }

    async fn delete_widget(&self, id: i64) -> Result<bool, ReviewSyncError> {
        queries::widgets::delete_widget(&self.db, id).await
    }
}

#[async_trait]
impl BusinessReader for SqliteStore {
    async fn get_business(&self, id: i64) -> Result<Option<Business>, ReviewSyncError> {
        queries::businesses::get_business(&self.db, id).await
    }

    async fn list_businesses(&self) -> Result<Vec<Business>, ReviewSyncError> {
        queries::businesses::list_businesses(&self.db).await
    }
}

#[async_trait]
impl ReviewReader for SqliteStore {
    async fn reviews_for_business(
        &self,
        business_id: i64,
    ) -> Result<Vec<Review>, ReviewSyncError> {
        queries::reviews::reviews_for_business(&self.db, business_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewsync_core::Theme;
    use reviewsync_test_utils::{sample_business, sample_reviews};
    use tempfile::tempdir;

    async fn open_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.db");
        let store = SqliteStore::open(path.to_str().unwrap()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn store_identifies_itself() {
        let (_dir, store) = open_store().await;
        assert_eq!(store.name(), "sqlite");
        assert_eq!(store.version(), semver::Version::new(0, 1, 0));
    }

    #[tokio::test]
    async fn health_check_reports_healthy_on_an_open_database() {
        let (_dir, store) = open_store().await;
        assert_eq!(store.health_check().await.unwrap(), HealthStatus::Healthy);
        store.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn trait_surface_round_trips_a_widget() {
        let (_dir, store) = open_store().await;
        queries::businesses::upsert_business(store.database(), &sample_business(1))
            .await
            .unwrap();
        for review in sample_reviews(1, &[5, 2]) {
            queries::reviews::insert_review(store.database(), &review)
                .await
                .unwrap();
        }

        let record = store
            .insert_widget(&NewWidgetRow {
                business_id: 1,
                theme: Theme::Grid,
                settings: r#"{"t":"grid"}"#.to_string(),
                embed_code: "<!-- ReviewSync Widget -->".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            store.get_widget(record.id).await.unwrap().unwrap(),
            record
        );
        assert_eq!(store.list_widgets_for_business(1).await.unwrap().len(), 1);
        assert_eq!(
            store.get_business(1).await.unwrap().unwrap().place_id,
            "ChIJplace1"
        );
        assert_eq!(store.reviews_for_business(1).await.unwrap().len(), 2);
        assert!(store.delete_widget(record.id).await.unwrap());
        assert!(!store.delete_widget(record.id).await.unwrap());
    }
}
