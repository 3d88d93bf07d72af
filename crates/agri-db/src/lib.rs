//! # agri-db: Local Storage for Smart Agri Yield
//!
//! Durable storage for the record collections. A SQLite table plays the part
//! of browser local storage: each collection is one JSON array under a
//! fixed key, read once at startup and rewritten in full on every change.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Smart Agri Yield Data Flow                          │
//! │                                                                         │
//! │  command (add_crop)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataState::add_crop ── Collection<Crop>::add (agri-core)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     agri-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐   ┌────────────┐ │   │
//! │  │   │   Database    │    │   Repositories     │   │ Migrations │ │   │
//! │  │   │   (pool.rs)   │◄───│ CollectionRepo     │   │ (embedded) │ │   │
//! │  │   │  SqlitePool   │    │ LocalStorageRepo   │   │            │ │   │
//! │  │   └───────────────┘    └────────────────────┘   └────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data dir>/com.smartagri.yield/agri.db                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agri_core::Crop;
//! use agri_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("agri.db")).await?;
//! let crops = db.collections().load::<Crop>().await.collection;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::collection::{CollectionRepository, LoadSource, Loaded, SeedOutcome};
pub use repository::local_storage::LocalStorageRepository;
