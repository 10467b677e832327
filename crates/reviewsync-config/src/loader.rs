// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./reviewsync.toml` >
//! `~/.config/reviewsync/reviewsync.toml` > `/etc/reviewsync/reviewsync.toml`
//! with environment variable overrides via `REVIEWSYNC_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ReviewSyncConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/reviewsync/reviewsync.toml` (system-wide)
/// 3. `~/.config/reviewsync/reviewsync.toml` (user XDG config)
/// 4. `./reviewsync.toml` (local directory)
/// 5. `REVIEWSYNC_*` environment variables
pub fn load_config() -> Result<ReviewSyncConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReviewSyncConfig::default()))
        .merge(Toml::file("/etc/reviewsync/reviewsync.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("reviewsync/reviewsync.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("reviewsync.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ReviewSyncConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReviewSyncConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ReviewSyncConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReviewSyncConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `REVIEWSYNC_STORAGE_DATABASE_PATH`
/// must map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("REVIEWSYNC_").map(|key| {
        // Figment hands the key through in its original (uppercase) form.
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("embed_", "embed.", 1);
        mapped.into()
    })
}
