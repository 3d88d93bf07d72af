//! # State Module
//!
//! Application state, one type per concern.
//!
//! Commands take only the state they need, and independent states never
//! block each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Tauri App (lib.rs setup hook)                    │   │
//! │  │  .manage(state) once at startup, injected into commands         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┴──────────┬──────────────┐               │
//! │     ▼              ▼                    ▼              ▼                │
//! │  ┌──────────┐ ┌─────────────────┐ ┌────────────┐ ┌─────────────┐       │
//! │  │DataState │ │ NavigationState │ │CatalogState│ │ ConfigState │       │
//! │  │          │ │                 │ │            │ │             │       │
//! │  │ 4 stored │ │ Navigator +     │ │ categories │ │ db path     │       │
//! │  │ collecti-│ │ analysis task   │ │ seasons    │ │ delay       │       │
//! │  │ ons + db │ │                 │ │ (session)  │ │ preferences │       │
//! │  └──────────┘ └─────────────────┘ └────────────┘ └─────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DataState: tokio Mutex held across the storage write                │
//! │  • NavigationState: Arc<Mutex<Navigator>> shared with the timer task   │
//! │  • CatalogState: tokio Mutex per collection                            │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod data;
mod navigation;

pub use catalog::CatalogState;
pub use config::ConfigState;
pub use data::{DataSnapshot, DataState};
pub use navigation::NavigationState;
