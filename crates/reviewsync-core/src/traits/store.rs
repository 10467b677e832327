// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence collaborator trait for widget records.

use async_trait::async_trait;

use crate::error::ReviewSyncError;
use crate::traits::collaborator::Collaborator;
use crate::types::{NewWidgetRow, WidgetRecord};

/// CRUD over persisted widget records, keyed by an opaque numeric id.
///
/// Implementations store rows verbatim; the compressed `settings` string
/// is produced and consumed exclusively by the lifecycle service, which
/// never writes a value exceeding the 255-character ceiling.
#[async_trait]
pub trait WidgetStore: Collaborator {
    /// Insert a new widget row, returning the persisted record with its id.
    async fn insert_widget(&self, row: &NewWidgetRow) -> Result<WidgetRecord, ReviewSyncError>;

    /// Fetch a widget by id.
    async fn get_widget(&self, id: i64) -> Result<Option<WidgetRecord>, ReviewSyncError>;

    /// List all widgets, newest first.
    async fn list_widgets(&self) -> Result<Vec<WidgetRecord>, ReviewSyncError>;

    /// List the widgets owned by one business, newest first.
    async fn list_widgets_for_business(
        &self,
        business_id: i64,
    ) -> Result<Vec<WidgetRecord>, ReviewSyncError>;

    /// Replace an existing row. Returns `false` if the id does not resolve.
    async fn update_widget(&self, record: &WidgetRecord) -> Result<bool, ReviewSyncError>;

    /// Delete a widget. Returns `false` if the id does not resolve.
    async fn delete_widget(&self, id: i64) -> Result<bool, ReviewSyncError>;
}
