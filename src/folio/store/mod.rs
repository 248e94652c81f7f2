//! # Storage Layer
//!
//! This module defines the storage abstraction for folio. The [`ItemStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production document storage
//!   - All records in a single `items.json` file (JSON array, insertion order)
//!   - Each operation is one load/modify/write of that file
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Ordering Contract
//!
//! `list_all` returns records by `created_at` descending. When two records
//! share a timestamp the later-inserted one sorts first, which matches the
//! client engine prepending a just-created item to its snapshot.

use crate::error::Result;
use crate::model::{Item, NewItem};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for item storage.
///
/// Implementations own id and timestamp assignment so that a record is
/// never observable in a partially-constructed state.
pub trait ItemStore {
    /// Persist a new record, assigning its id and timestamps.
    fn insert(&mut self, fields: NewItem) -> Result<Item>;

    /// Every record, newest first.
    fn list_all(&self) -> Result<Vec<Item>>;

    /// Remove a record if present. Returns whether anything was removed;
    /// a missing id is not an error.
    fn delete_by_id(&mut self, id: &Uuid) -> Result<bool>;
}

/// Sort records newest-first, later insertion winning ties.
///
/// `items` must be in insertion order. The reverse puts later inserts
/// first; the stable sort then preserves that among equal timestamps.
pub(crate) fn newest_first(items: &mut Vec<Item>) {
    items.reverse();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
