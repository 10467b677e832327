// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Widget record lifecycle.
//!
//! [`WidgetService`] orchestrates create/update/delete against the
//! injected persistence collaborator, keeping the stored `embed_code`
//! consistent with `theme`/`settings`: any change to either regenerates
//! the embed fragment before persistence. The settings codec is the
//! single boundary for the stored `settings` column -- callers only ever
//! see the canonical decompressed model.

use std::sync::Arc;

use tracing::debug;

use reviewsync_codec::{compress, decompress};
use reviewsync_core::{
    BusinessReader, NewWidgetRow, ReviewSyncError, Widget, WidgetRecord, WidgetSettings,
    WidgetStore, WidgetUpdate,
};
use reviewsync_embed::{generate, EmbedContext, EmbedOptions};

/// Lifecycle service over one widget store and one business read source.
///
/// Both collaborators and the embed options are injected at construction;
/// there is no hidden global client or configuration.
pub struct WidgetService {
    store: Arc<dyn WidgetStore>,
    businesses: Arc<dyn BusinessReader>,
    embed: EmbedOptions,
}

impl WidgetService {
    pub fn new(
        store: Arc<dyn WidgetStore>,
        businesses: Arc<dyn BusinessReader>,
        embed: EmbedOptions,
    ) -> Self {
        Self {
            store,
            businesses,
            embed,
        }
    }

    /// Create a widget for a business.
    ///
    /// Settings are normalized, compressed for storage, and the embed
    /// fragment is generated with a container id derived from the
    /// persisted record id.
    pub async fn create(
        &self,
        business_id: i64,
        mut settings: WidgetSettings,
    ) -> Result<Widget, ReviewSyncError> {
        settings.normalize();
        let place_id = self.place_id_for(business_id).await.map_err(|e| {
            ReviewSyncError::CreateFailed {
                message: e.to_string(),
            }
        })?;

        let compressed = compress(&settings)?;
        let row = NewWidgetRow {
            business_id,
            theme: settings.theme,
            settings: compressed.clone(),
            embed_code: generate(
                &self.embed,
                &EmbedContext {
                    business_id,
                    place_id: &place_id,
                    record_id: None,
                    settings: &settings,
                },
            ),
        };

        let mut record =
            self.store
                .insert_widget(&row)
                .await
                .map_err(|e| ReviewSyncError::CreateFailed {
                    message: e.to_string(),
                })?;

        // Re-emit the embed with the now-known record id so the container
        // id stays stable across future regenerations.
        record.embed_code = generate(
            &self.embed,
            &EmbedContext {
                business_id,
                place_id: &place_id,
                record_id: Some(record.id),
                settings: &settings,
            },
        );
        self.store
            .update_widget(&record)
            .await
            .map_err(|e| ReviewSyncError::CreateFailed {
                message: e.to_string(),
            })?;

        debug!(id = record.id, business_id, "widget created");
        Ok(Widget {
            id: record.id,
            business_id,
            theme: settings.theme,
            settings,
            embed_code: record.embed_code,
        })
    }

    /// Apply a partial update to an existing widget.
    ///
    /// When `theme` or `settings` are present the stored settings are
    /// recompressed and the embed fragment regenerated from the *merged*
    /// record; otherwise the embed code is left untouched.
    pub async fn update(&self, id: i64, update: WidgetUpdate) -> Result<Widget, ReviewSyncError> {
        let record = self
            .store
            .get_widget(id)
            .await?
            .ok_or(ReviewSyncError::NotFound { id })?;

        let business_id = update.business_id.unwrap_or(record.business_id);
        let rendering_changed = update.theme.is_some() || update.settings.is_some();

        let (settings, new_record) = if rendering_changed {
            let mut settings = match update.settings {
                Some(mut s) => {
                    s.normalize();
                    s
                }
                None => decompress(&record.settings),
            };
            if let Some(theme) = update.theme {
                settings.theme = theme;
            }

            let place_id = self.place_id_for(business_id).await.map_err(|e| {
                ReviewSyncError::UpdateFailed {
                    message: e.to_string(),
                }
            })?;
            let embed_code = generate(
                &self.embed,
                &EmbedContext {
                    business_id,
                    place_id: &place_id,
                    record_id: Some(id),
                    settings: &settings,
                },
            );
            let new_record = WidgetRecord {
                id,
                business_id,
                theme: settings.theme,
                settings: compress(&settings)?,
                embed_code,
            };
            (settings, new_record)
        } else {
            let settings = decompress(&record.settings);
            let new_record = WidgetRecord {
                business_id,
                ..record
            };
            (settings, new_record)
        };

        let found = self
            .store
            .update_widget(&new_record)
            .await
            .map_err(|e| ReviewSyncError::UpdateFailed {
                message: e.to_string(),
            })?;
        if !found {
            return Err(ReviewSyncError::NotFound { id });
        }

        debug!(id, rendering_changed, "widget updated");
        Ok(Widget {
            id,
            business_id,
            theme: new_record.theme,
            settings,
            embed_code: new_record.embed_code,
        })
    }

    /// Delete a widget. Deleting an id that does not resolve is reported
    /// as `NotFound`, never silently.
    pub async fn delete(&self, id: i64) -> Result<(), ReviewSyncError> {
        if self.store.delete_widget(id).await? {
            debug!(id, "widget deleted");
            Ok(())
        } else {
            Err(ReviewSyncError::NotFound { id })
        }
    }

    /// Fetch one widget with its settings decompressed.
    pub async fn get(&self, id: i64) -> Result<Option<Widget>, ReviewSyncError> {
        Ok(self.store.get_widget(id).await?.map(widget_from_record))
    }

    /// All widgets, newest first, settings decompressed.
    pub async fn list(&self) -> Result<Vec<Widget>, ReviewSyncError> {
        let records = self.store.list_widgets().await?;
        Ok(records.into_iter().map(widget_from_record).collect())
    }

    /// The widgets owned by one business, newest first.
    pub async fn list_for_business(
        &self,
        business_id: i64,
    ) -> Result<Vec<Widget>, ReviewSyncError> {
        let records = self.store.list_widgets_for_business(business_id).await?;
        Ok(records.into_iter().map(widget_from_record).collect())
    }

    async fn place_id_for(&self, business_id: i64) -> Result<String, ReviewSyncError> {
        let business = self
            .businesses
            .get_business(business_id)
            .await?
            .ok_or_else(|| {
                ReviewSyncError::Validation(format!("unknown business: {business_id}"))
            })?;
        Ok(business.place_id)
    }
}

fn widget_from_record(record: WidgetRecord) -> Widget {
    Widget {
        id: record.id,
        business_id: record.business_id,
        theme: record.theme,
        settings: decompress(&record.settings),
        embed_code: record.embed_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewsync_codec::SETTINGS_MAX_LEN;
    use reviewsync_core::Theme;
    use reviewsync_test_utils::{sample_business, sample_reviews, MemoryStore};
    use serde_json::Value;

    async fn service_with_store() -> (WidgetService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        store
            .seed_business(sample_business(1), sample_reviews(1, &[5, 4, 3]))
            .await;
        let service = WidgetService::new(
            store.clone(),
            store.clone(),
            EmbedOptions::default(),
        );
        (service, store)
    }

    fn embed_config(embed_code: &str) -> Value {
        let start = embed_code.find("var config = ").unwrap() + "var config = ".len();
        let end = embed_code[start..].find(";\n").unwrap();
        serde_json::from_str(&embed_code[start..start + end]).unwrap()
    }

    #[tokio::test]
    async fn create_persists_compressed_settings_and_embed_code() {
        let (service, store) = service_with_store().await;
        let mut settings = WidgetSettings::default();
        settings.theme = Theme::List;
        settings.max_reviews = 5;

        let widget = service.create(1, settings.clone()).await.unwrap();
        assert_eq!(widget.business_id, 1);
        assert_eq!(widget.theme, Theme::List);

        let raw = store.raw_widget(widget.id).await.unwrap();
        assert!(raw.settings.len() <= SETTINGS_MAX_LEN);
        assert_ne!(raw.settings, "{}", "settings column holds the compressed form");
        assert!(raw
            .embed_code
            .contains(&format!("reviewsync-widget-{}", widget.id)));

        let config = embed_config(&raw.embed_code);
        assert_eq!(config["businessId"], 1);
        assert_eq!(config["placeId"], "ChIJplace1");
        assert_eq!(config["theme"], "list");
        assert_eq!(config["maxReviews"], 5);
    }

    #[tokio::test]
    async fn create_normalizes_out_of_range_settings() {
        let (service, store) = service_with_store().await;
        let mut settings = WidgetSettings::default();
        settings.min_rating = 9;
        settings.max_reviews = 0;

        let widget = service.create(1, settings).await.unwrap();
        assert_eq!(widget.settings.min_rating, 5);
        assert_eq!(widget.settings.max_reviews, 1);

        // The stored form round-trips to the same normalized values.
        let raw = store.raw_widget(widget.id).await.unwrap();
        assert_eq!(decompress(&raw.settings), widget.settings);
    }

    #[tokio::test]
    async fn create_for_unknown_business_reports_create_failed() {
        let (service, _store) = service_with_store().await;
        let err = service
            .create(99, WidgetSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewSyncError::CreateFailed { .. }));
    }

    #[tokio::test]
    async fn create_surfaces_collaborator_rejection() {
        let (service, store) = service_with_store().await;
        store.fail_writes(true);
        let err = service
            .create(1, WidgetSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewSyncError::CreateFailed { .. }));
    }

    #[tokio::test]
    async fn theme_only_update_regenerates_embed_code() {
        let (service, store) = service_with_store().await;
        let mut settings = WidgetSettings::default();
        settings.max_reviews = 7;
        let widget = service.create(1, settings).await.unwrap();
        let before = store.raw_widget(widget.id).await.unwrap();

        let updated = service
            .update(
                widget.id,
                WidgetUpdate {
                    theme: Some(Theme::Carousel),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.theme, Theme::Carousel);
        let after = store.raw_widget(widget.id).await.unwrap();
        assert_ne!(before.embed_code, after.embed_code);

        // Regeneration used the merged record: the new theme plus the
        // previously stored settings.
        let config = embed_config(&after.embed_code);
        assert_eq!(config["theme"], "carousel");
        assert_eq!(config["maxReviews"], 7);
        assert_eq!(after.theme, Theme::Carousel);
    }

    #[tokio::test]
    async fn update_without_theme_or_settings_leaves_embed_untouched() {
        let (service, store) = service_with_store().await;
        let widget = service.create(1, WidgetSettings::default()).await.unwrap();
        let before = store.raw_widget(widget.id).await.unwrap();

        service
            .update(
                widget.id,
                WidgetUpdate {
                    business_id: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let after = store.raw_widget(widget.id).await.unwrap();
        assert_eq!(before.embed_code, after.embed_code);
        assert_eq!(before.settings, after.settings);
    }

    #[tokio::test]
    async fn update_missing_widget_reports_not_found() {
        let (service, _store) = service_with_store().await;
        let err = service
            .update(12345, WidgetUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewSyncError::NotFound { id: 12345 }));
    }

    #[tokio::test]
    async fn delete_missing_widget_reports_not_found() {
        let (service, _store) = service_with_store().await;
        let err = service.delete(777).await.unwrap_err();
        assert!(matches!(err, ReviewSyncError::NotFound { id: 777 }));
    }

    #[tokio::test]
    async fn double_delete_reports_not_found() {
        let (service, _store) = service_with_store().await;
        let widget = service.create(1, WidgetSettings::default()).await.unwrap();

        service.delete(widget.id).await.unwrap();
        let err = service.delete(widget.id).await.unwrap_err();
        assert!(matches!(err, ReviewSyncError::NotFound { .. }));
    }

    #[tokio::test]
    async fn get_decompresses_at_the_boundary() {
        let (service, _store) = service_with_store().await;
        let mut settings = WidgetSettings::default();
        settings.theme = Theme::Grid;
        settings.columns = 3;
        let created = service.create(1, settings.clone()).await.unwrap();

        let fetched = service.get(created.id).await.unwrap().unwrap();
        settings.normalize();
        assert_eq!(fetched.settings, settings);
        assert!(service.get(99999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_for_business_filters_by_owner() {
        let (service, store) = service_with_store().await;
        store
            .seed_business(sample_business(2), vec![])
            .await;

        let a = service.create(1, WidgetSettings::default()).await.unwrap();
        let b = service.create(2, WidgetSettings::default()).await.unwrap();

        let for_one = service.list_for_business(1).await.unwrap();
        assert_eq!(for_one.len(), 1);
        assert_eq!(for_one[0].id, a.id);

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
        // Newest first.
        assert_eq!(all[0].id, b.id);
    }

    #[tokio::test]
    async fn oversized_settings_fail_the_save_without_persisting() {
        let (service, store) = service_with_store().await;
        let mut settings = WidgetSettings::default();
        settings.accent_color = "#".repeat(300);
        settings
            .extra
            .insert("note".to_string(), Value::String("x".repeat(400)));

        let err = service.create(1, settings).await.unwrap_err();
        assert!(matches!(err, ReviewSyncError::SettingsTooLarge { .. }));
        assert!(store.list_widgets().await.unwrap().is_empty());
    }
}
