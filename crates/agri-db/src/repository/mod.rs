//! # Repository Module
//!
//! Storage access, in two layers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DataState (agri-app)                                                   │
//! │       │  db.collections().save(&crops)                                  │
//! │       ▼                                                                 │
//! │  CollectionRepository    typed: Collection<T> ⇄ JSON array              │
//! │       │  storage.set("crops", "[...]")                                  │
//! │       ▼                                                                 │
//! │  LocalStorageRepository  untyped: key → string value                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite `local_storage` table                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod collection;
pub mod local_storage;
