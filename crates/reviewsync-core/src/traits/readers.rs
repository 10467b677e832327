// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only collaborator traits for business and review entities.

use async_trait::async_trait;

use crate::error::ReviewSyncError;
use crate::traits::collaborator::Collaborator;
use crate::types::{Business, Review};

/// Read source for [`Business`] entities. List order is the source's own.
#[async_trait]
pub trait BusinessReader: Collaborator {
    async fn get_business(&self, id: i64) -> Result<Option<Business>, ReviewSyncError>;

    async fn list_businesses(&self) -> Result<Vec<Business>, ReviewSyncError>;
}

/// Read source for [`Review`] entities.
///
/// Returns reviews in the source's order (typically recency-descending);
/// the renderer does not re-sort.
#[async_trait]
pub trait ReviewReader: Collaborator {
    async fn reviews_for_business(
        &self,
        business_id: i64,
    ) -> Result<Vec<Review>, ReviewSyncError>;
}
