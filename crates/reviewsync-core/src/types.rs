// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain entities shared across the ReviewSync workspace.
//!
//! [`Business`] and [`Review`] are read-only collaborator entities; the
//! widget toolchain consumes them but never writes them back.

use serde::{Deserialize, Serialize};

use crate::settings::{Theme, WidgetSettings};

/// A business whose reviews a widget displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    /// Upstream place identifier used by the embed runtime to refresh reviews.
    pub place_id: String,
    pub address: String,
    /// Aggregate rating, 0-5 at one-decimal granularity.
    pub rating: f64,
    pub total_reviews: i64,
    /// RFC 3339 timestamp of the last upstream fetch.
    pub last_fetched: String,
}

/// A single review belonging to a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub business_id: i64,
    pub author_name: String,
    pub author_photo_url: Option<String>,
    /// Integer star rating, 1-5.
    pub rating: i64,
    pub text: Option<String>,
    /// RFC 3339 publication timestamp.
    pub published_at: String,
}

/// A persisted widget row, exactly as stored.
///
/// `settings` holds the compressed short-key form (255-char ceiling);
/// callers outside the storage boundary work with the decompressed
/// [`Widget`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetRecord {
    pub id: i64,
    pub business_id: i64,
    pub theme: Theme,
    pub settings: String,
    pub embed_code: String,
}

/// A widget with its settings decompressed into the canonical model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: i64,
    pub business_id: i64,
    pub theme: Theme,
    pub settings: WidgetSettings,
    pub embed_code: String,
}

/// Input row for widget creation, already compressed and embed-generated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWidgetRow {
    pub business_id: i64,
    pub theme: Theme,
    pub settings: String,
    pub embed_code: String,
}

/// Partial update applied to an existing widget by the lifecycle service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetUpdate {
    pub business_id: Option<i64>,
    pub theme: Option<Theme>,
    pub settings: Option<WidgetSettings>,
}

/// Health status reported by collaborator health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Collaborator is fully operational.
    Healthy,
    /// Operational but experiencing issues.
    Degraded(String),
    /// Not operational.
    Unhealthy(String),
}
