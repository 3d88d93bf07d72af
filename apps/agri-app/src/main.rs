//! # Smart Agri Yield Application Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Smart Agri Yield Desktop                         │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  • Login (role select)   • Farmer prediction flow                │  │
//! │  │  • Admin sidebar screens • Dark mode + language                  │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                            │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │  lib.rs ─────► logging, database, state, command registration   │  │
//! │  │  commands/ ──► add_crop, login, submit_prediction, ...          │  │
//! │  │  state/ ─────► DataState, NavigationState, CatalogState, Config │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  SQLite local storage: agri.db (key → JSON array per collection) │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() -> tauri::Result<()> {
    // The actual setup is in lib.rs so tests can build the state without a window
    agri_app::run()
}
