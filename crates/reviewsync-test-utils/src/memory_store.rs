// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory implementation of the persistence collaborator traits.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use reviewsync_core::{
    Business, BusinessReader, Collaborator, HealthStatus, NewWidgetRow, Review, ReviewReader,
    ReviewSyncError, WidgetRecord, WidgetStore,
};

/// In-memory store backing lifecycle tests.
///
/// Widgets live in a `BTreeMap` keyed by id; businesses and reviews are
/// seeded up front via [`MemoryStore::seed_business`]. A `fail_writes`
/// flag makes the next write report a collaborator rejection, for
/// exercising the CreateFailed/UpdateFailed paths.
#[derive(Default)]
pub struct MemoryStore {
    widgets: Mutex<BTreeMap<i64, WidgetRecord>>,
    businesses: Mutex<BTreeMap<i64, Business>>,
    reviews: Mutex<Vec<Review>>,
    next_id: AtomicI64,
    fail_writes: std::sync::atomic::AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    /// Seed a business and its reviews.
    pub async fn seed_business(&self, business: Business, reviews: Vec<Review>) {
        self.businesses
            .lock()
            .await
            .insert(business.id, business);
        self.reviews.lock().await.extend(reviews);
    }

    /// Make every subsequent write fail with a collaborator rejection.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), ReviewSyncError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(ReviewSyncError::Storage {
                source: "write rejected by test store".into(),
            })
        } else {
            Ok(())
        }
    }

    /// Direct access to a stored row, bypassing the service boundary.
    pub async fn raw_widget(&self, id: i64) -> Option<WidgetRecord> {
        self.widgets.lock().await.get(&id).cloned()
    }
}

#[async_trait]
impl Collaborator for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, ReviewSyncError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ReviewSyncError> {
        Ok(())
    }
}

#[async_trait]
impl WidgetStore for MemoryStore {
    async fn insert_widget(&self, row: &NewWidgetRow) -> Result<WidgetRecord, ReviewSyncError> {
        self.check_writable()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = WidgetRecord {
            id,
            business_id: row.business_id,
            theme: row.theme,
            settings: row.settings.clone(),
            embed_code: row.embed_code.clone(),
        };
        self.widgets.lock().await.insert(id, record.clone());
        Ok(record)
    }

    async fn get_widget(&self, id: i64) -> Result<Option<WidgetRecord>, ReviewSyncError> {
        Ok(self.widgets.lock().await.get(&id).cloned())
    }

    async fn list_widgets(&self) -> Result<Vec<WidgetRecord>, ReviewSyncError> {
        let widgets = self.widgets.lock().await;
        let mut all: Vec<WidgetRecord> = widgets.values().cloned().collect();
        all.reverse(); // newest first
        Ok(all)
    }

    async fn list_widgets_for_business(
        &self,
        business_id: i64,
    ) -> Result<Vec<WidgetRecord>, ReviewSyncError> {
        let all = self.list_widgets().await?;
        Ok(all
            .into_iter()
            .filter(|w| w.business_id == business_id)
            .collect())
    }

    async fn update_widget(&self, record: &WidgetRecord) -> Result<bool, ReviewSyncError> {
        self.check_writable()?;
        let mut widgets = self.widgets.lock().await;
        match widgets.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_widget(&self, id: i64) -> Result<bool, ReviewSyncError> {
        self.check_writable()?;
        Ok(self.widgets.lock().await.remove(&id).is_some())
    }
}

#[async_trait]
impl BusinessReader for MemoryStore {
    async fn get_business(&self, id: i64) -> Result<Option<Business>, ReviewSyncError> {
        Ok(self.businesses.lock().await.get(&id).cloned())
    }

    async fn list_businesses(&self) -> Result<Vec<Business>, ReviewSyncError> {
        Ok(self.businesses.lock().await.values().cloned().collect())
    }
}

#[async_trait]
impl ReviewReader for MemoryStore {
    async fn reviews_for_business(
        &self,
        business_id: i64,
    ) -> Result<Vec<Review>, ReviewSyncError> {
        Ok(self
            .reviews
            .lock()
            .await
            .iter()
            .filter(|r| r.business_id == business_id)
            .cloned()
            .collect())
    }
}
