// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that all ReviewSync collaborators must implement.

use async_trait::async_trait;

use crate::error::ReviewSyncError;
use crate::types::HealthStatus;

/// The base trait for external collaborators (persistence, read sources).
///
/// Provides identity, lifecycle, and health check capabilities so the
/// enclosing application can report on its backing services.
#[async_trait]
pub trait Collaborator: Send + Sync + 'static {
    /// Returns the human-readable name of this collaborator instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this collaborator.
    fn version(&self) -> semver::Version;

    /// Performs a health check and returns the collaborator's current status.
    async fn health_check(&self) -> Result<HealthStatus, ReviewSyncError>;

    /// Gracefully shuts down, flushing pending writes and releasing resources.
    async fn shutdown(&self) -> Result<(), ReviewSyncError>;
}
