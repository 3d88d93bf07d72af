//! # Collection
//!
//! Ordered in-memory collection implementing the store's CRUD contract.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Collection<T> Operations                             │
//! │                                                                         │
//! │  add(draft)        → new UUID id, appended at the end, never fails      │
//! │  update(id, patch) → patch merged into the match; missing id = no-op    │
//! │  delete(id)        → match removed, order of the rest kept;             │
//! │                      missing id = no-op                                 │
//! │  items()           → current records in insertion order                 │
//! │                                                                         │
//! │  No validation happens here. Screens validate drafts before calling.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `update` and `delete` report whether anything changed so the caller can
//! skip a storage rewrite, but a miss is not an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record that can live in a [`Collection`].
pub trait Record: Clone {
    /// Fields supplied on creation (everything except generated ones).
    type Draft;

    /// Partial update; absent fields are left unchanged.
    type Patch;

    fn id(&self) -> &str;

    /// Builds a record from a freshly generated id and its draft.
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Merges a patch into this record. Never touches the id.
    fn apply(&mut self, patch: Self::Patch);

    /// Case-insensitive match against an already lowercased needle.
    fn matches(&self, needle: &str) -> bool;
}

/// A record persisted under a fixed local storage key.
pub trait StoredRecord: Record + Serialize + for<'de> Deserialize<'de> {
    /// Local storage key holding the serialized array.
    const STORAGE_KEY: &'static str;

    /// Records used when storage holds nothing usable for this key.
    fn seed() -> Vec<Self>;
}

/// Ordered set of records with unique ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// Creates a collection from existing records, keeping their order.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant
    /// holds even for hand-edited storage.
    pub fn from_records(records: Vec<T>) -> Self {
        let mut items: Vec<T> = Vec::with_capacity(records.len());
        for record in records {
            if !items.iter().any(|existing| existing.id() == record.id()) {
                items.push(record);
            }
        }
        Collection { items }
    }

    /// Records in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends a new record built from `draft` and returns a copy of it.
    pub fn add(&mut self, draft: T::Draft) -> T {
        let id = self.next_id();
        let record = T::from_draft(id, draft);
        self.items.push(record.clone());
        record
    }

    /// Merges `patch` into the record with `id`.
    ///
    /// Returns the updated record, or `None` when the id is unknown (in
    /// which case nothing changed).
    pub fn update(&mut self, id: &str, patch: T::Patch) -> Option<T> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.apply(patch);
        Some(item.clone())
    }

    /// Removes the record with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Records matching `query` by their type's search fields.
    ///
    /// An empty (or whitespace) query returns every record.
    pub fn search(&self, query: &str) -> Vec<T> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| item.matches(&needle))
            .cloned()
            .collect()
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl<T: StoredRecord> Collection<T> {
    /// A collection holding the type's seed records.
    pub fn seeded() -> Self {
        Collection::from_records(T::seed())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
