//! # agri-core: Pure Domain Logic for Smart Agri Yield
//!
//! This crate is the **heart** of Smart Agri Yield. It holds the record
//! types, the in-memory collection contract and the navigation state
//! machine as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Smart Agri Yield Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Renderer (web UI)                            │   │
//! │  │   Landing ──► Input ──► Loading ──► Result ──► Dashboard        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    agri-app (DataState, NavigationState)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ agri-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │ collection │  │ navigation │  │validation│  │   │
//! │  │   │   Crop    │  │ Collection │  │ Navigator  │  │  rules   │  │   │
//! │  │   │   User    │  │  Record    │  │ FarmerPage │  │  checks  │  │   │
//! │  │   └───────────┘  └────────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TIMERS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    agri-db (Local Storage)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Record types (Crop, SoilType, WeatherRecord, User, ...)
//! - [`collection`] - Ordered in-memory collection with the CRUD contract
//! - [`navigation`] - Role, page enums and the `Navigator` state machine
//! - [`validation`] - Form validation run before records reach the store
//! - [`stats`] - Summaries derived from the collections
//! - [`seed`] - Default records used when storage is empty
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use agri_core::{Collection, Crop, NewCrop};
//!
//! let mut crops: Collection<Crop> = Collection::seeded();
//! assert_eq!(crops.len(), 6);
//!
//! let barley = crops.add(NewCrop {
//!     name: "Barley".to_string(),
//!     icon: "🌿".to_string(),
//!     category: "Cereals".to_string(),
//! });
//! assert_eq!(crops.len(), 7);
//! assert_eq!(crops.items().last().map(|c| c.id.as_str()), Some(barley.id.as_str()));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
pub mod navigation;
pub mod seed;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use collection::{Collection, Record, StoredRecord};
pub use error::{CoreError, CoreResult, ValidationError};
pub use navigation::{
    AdminPage, AdminScreen, AnalysisTicket, CropManagementTab, FarmerPage, NavigationSnapshot,
    Navigator, Role, UserListKind, View,
};
pub use stats::{CategoryCount, DashboardSummary, RoleCount, WeatherSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Delay between submitting the crop input form and showing the result.
///
/// The "analysis" is simulated; the host schedules the transition after
/// this many milliseconds unless the user leaves the loading page first.
pub const ANALYSIS_DELAY_MS: u64 = 3_000;

/// Maximum length of a display name (crop, soil type, user, ...).
pub const MAX_NAME_LEN: usize = 100;
