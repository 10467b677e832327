// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions for ReviewSync persistence and read
//! sources.
//!
//! All collaborators extend the [`Collaborator`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod collaborator;
pub mod readers;
pub mod store;

pub use collaborator::Collaborator;
pub use readers::{BusinessReader, ReviewReader};
pub use store::WidgetStore;
