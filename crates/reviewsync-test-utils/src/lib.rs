// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for ReviewSync integration tests.
//!
//! Provides an in-memory store and fixture builders for fast,
//! deterministic, CI-runnable tests without a database.

pub mod fixtures;
pub mod memory_store;

pub use fixtures::{sample_business, sample_reviews};
pub use memory_store::MemoryStore;
