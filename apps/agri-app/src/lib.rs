//! # Smart Agri Yield Desktop Library
//!
//! Core library for the Smart Agri Yield desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! agri_app/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── data.rs       ◄─── Record store (crops, soils, weather, users)
//! │   ├── navigation.rs ◄─── View router + analysis timer
//! │   ├── catalog.rs    ◄─── Session-scoped categories and seasons
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   └── ...           ◄─── One file per screen area
//! └── error.rs          ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌──────────────┐ ┌─────────────────┐ ┌──────────────┐ ┌────────────┐  │
//! │  │  DataState   │ │ NavigationState │ │ CatalogState │ │ConfigState │  │
//! │  │              │ │                 │ │              │ │            │  │
//! │  │ • Collections│ │ • Role + pages  │ │ • Categories │ │ • DB path  │  │
//! │  │ • Storage    │ │ • Analysis task │ │ • Seasons    │ │ • Delay    │  │
//! │  └──────────────┘ └─────────────────┘ └──────────────┘ └────────────┘  │
//! │                                                                         │
//! │  Each command only requests the state it needs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use agri_core::Navigator;
use agri_db::{Database, DbConfig};
use tauri::{Manager, RunEvent, Runtime};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::InitError;
use state::{CatalogState, ConfigState, DataState, NavigationState};

/// Every state object, built once before it is handed to Tauri.
pub struct AppState {
    pub config: ConfigState,
    pub data: DataState,
    pub navigation: NavigationState,
    pub catalog: CatalogState,
}

impl AppState {
    /// Opens local storage at the configured path and loads the state.
    pub async fn open(config: ConfigState) -> Result<AppState, InitError> {
        let db_path = config.resolve_database_path()?;
        info!(?db_path, "Database path determined");

        let db = Database::new(DbConfig::new(db_path)).await?;
        info!("Database connected and migrations applied");

        Ok(AppState::load(config, db).await)
    }

    /// Builds the state objects over an already opened database.
    pub async fn load(config: ConfigState, db: Database) -> AppState {
        let data = DataState::load(db).await;
        let navigator = Navigator::with_preferences(config.default_language, config.dark_mode);
        let navigation = NavigationState::new(navigator, config.analysis_delay());

        AppState {
            config,
            data,
            navigation,
            catalog: CatalogState::new(),
        }
    }

    /// Hands each state object to Tauri so commands can request it.
    pub fn register<R: Runtime, M: Manager<R>>(self, manager: &M) {
        manager.manage(self.config);
        manager.manage(self.data);
        manager.manage(self.navigation);
        manager.manage(self.catalog);
    }
}

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • AGRI_DB_PATH, else the platform data directory                    │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Load Collections ─────────────────────────────────────────────────► │
/// │     • Stored value, else seed data                                      │
/// │     • Corrupt values fall back to seed data with a warning              │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Manage state, register all commands, launch window                │
/// │     • Close the database on exit                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> tauri::Result<()> {
    init_tracing();
    info!("Starting Smart Agri Yield");

    let app = tauri::Builder::default()
        .setup(|app| {
            let config = ConfigState::from_env();
            let state = tauri::async_runtime::block_on(AppState::open(config))?;
            state.register(app.handle());

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Crop commands
            commands::crop::list_crops,
            commands::crop::search_crops,
            commands::crop::add_crop,
            commands::crop::update_crop,
            commands::crop::delete_crop,
            // Soil type commands
            commands::soil::list_soil_types,
            commands::soil::search_soil_types,
            commands::soil::add_soil_type,
            commands::soil::update_soil_type,
            commands::soil::delete_soil_type,
            // Weather commands
            commands::weather::list_weather,
            commands::weather::search_weather,
            commands::weather::add_weather,
            commands::weather::update_weather,
            commands::weather::delete_weather,
            commands::weather::get_weather_summary,
            // User commands
            commands::user::list_users,
            commands::user::search_users,
            commands::user::list_users_by_kind,
            commands::user::add_user,
            commands::user::update_user,
            commands::user::delete_user,
            // Category and season commands
            commands::catalog::list_crop_categories,
            commands::catalog::search_crop_categories,
            commands::catalog::add_crop_category,
            commands::catalog::update_crop_category,
            commands::catalog::delete_crop_category,
            commands::catalog::list_seasons,
            commands::catalog::search_seasons,
            commands::catalog::add_season,
            commands::catalog::update_season,
            commands::catalog::delete_season,
            // Navigation commands
            commands::navigation::get_navigation,
            commands::navigation::login,
            commands::navigation::logout,
            commands::navigation::start_prediction,
            commands::navigation::submit_prediction,
            commands::navigation::optimize,
            commands::navigation::go_back,
            commands::navigation::go_home,
            commands::navigation::open_help,
            commands::navigation::list_admin_pages,
            commands::navigation::navigate_admin,
            commands::navigation::toggle_dark_mode,
            commands::navigation::list_languages,
            commands::navigation::set_language,
            // Dashboard and config commands
            commands::dashboard::get_dashboard_summary,
            commands::dashboard::get_store_snapshot,
            commands::config::get_config,
        ])
        .build(tauri::generate_context!())?;

    app.run(|handle, event| {
        if let RunEvent::Exit = event {
            if let Some(data) = handle.try_state::<DataState>() {
                tauri::async_runtime::block_on(data.database().close());
                info!("Database closed");
            }
        }
    });
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=agri=trace` - Show trace for agri crates only
/// - Default: `info,agri=debug,sqlx=warn`
///
/// Calling it more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,agri=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
