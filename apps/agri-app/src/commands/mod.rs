//! # Commands Module
//!
//! Tauri commands exposed to the web renderer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── crop.rs        ◄─── Crop list, search, dialogs
//! ├── soil.rs        ◄─── Soil type list, search, dialogs
//! ├── weather.rs     ◄─── Weather records and summary
//! ├── user.rs        ◄─── Admin and farmer user lists
//! ├── catalog.rs     ◄─── Crop categories and seasons (session only)
//! ├── navigation.rs  ◄─── Login, farmer flow, admin sidebar, preferences
//! ├── dashboard.rs   ◄─── Admin dashboard numbers
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Tauri Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend (TypeScript)                                                  │
//! │  ─────────────────────                                                  │
//! │  const crop = await invoke('add_crop', {                                │
//! │    draft: { name: 'Barley', icon: '🌿', category: 'Cereals' }           │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via Tauri, args deserialized by parameter name)          │
//! │         ▼                                                               │
//! │  Backend (Rust)                                                         │
//! │  ──────────────                                                         │
//! │  #[tauri::command]                                                      │
//! │  async fn add_crop(                                                     │
//! │      data: State<'_, DataState>,  ◄── Injected by Tauri                 │
//! │      draft: NewCrop,              ◄── From frontend                     │
//! │  ) -> Result<Crop, ApiError>                                            │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: Crop  or  { code, message }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! async fn list_crops(data: State<'_, DataState>)
//!
//! // Only needs navigation
//! async fn login(nav: State<'_, NavigationState>, role: Role)
//!
//! // Needs both catalog and store (category crop counts)
//! async fn list_crop_categories(catalog: State<'_, CatalogState>, data: State<'_, DataState>)
//! ```

pub mod catalog;
pub mod config;
pub mod crop;
pub mod dashboard;
pub mod navigation;
pub mod soil;
pub mod user;
pub mod weather;
