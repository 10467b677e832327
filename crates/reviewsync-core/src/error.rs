// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the ReviewSync widget toolchain.

use thiserror::Error;

/// The primary error type used across ReviewSync operations.
#[derive(Debug, Error)]
pub enum ReviewSyncError {
    /// A settings field or input value outside its documented domain.
    #[error("validation error: {0}")]
    Validation(String),

    /// Compressed settings exceed the storage ceiling even after the
    /// essential-only fallback. Fatal to the save operation; never
    /// silently dropped.
    #[error("compressed settings are {len} chars, exceeding the {max}-char storage ceiling")]
    SettingsTooLarge { len: usize, max: usize },

    /// The requested widget record does not exist.
    #[error("widget not found: {id}")]
    NotFound { id: i64 },

    /// The persistence collaborator rejected a create.
    #[error("widget create failed: {message}")]
    CreateFailed { message: String },

    /// The persistence collaborator rejected an update.
    #[error("widget update failed: {message}")]
    UpdateFailed { message: String },

    /// Storage backend errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors surfaced outside the config crate's diagnostics.
    #[error("configuration error: {0}")]
    Config(String),
}
