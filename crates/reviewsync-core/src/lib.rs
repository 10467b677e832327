// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the ReviewSync widget toolchain.
//!
//! This crate provides the canonical widget settings model, domain
//! entities, error types, and the collaborator traits the lifecycle
//! service is built against. Persistence backends implement the traits
//! defined here.

pub mod error;
pub mod settings;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ReviewSyncError;
pub use settings::{
    Alignment, Animation, AspectRatio, BorderStyle, Theme, WidgetSettings, FONT_FAMILIES,
};
pub use types::{
    Business, HealthStatus, NewWidgetRow, Review, Widget, WidgetRecord, WidgetUpdate,
};

// Re-export collaborator traits at crate root.
pub use traits::{BusinessReader, Collaborator, ReviewReader, WidgetStore};
