//! # Dashboard Commands
//!
//! Admin dashboard numbers, all computed from the store on each call.

use agri_core::DashboardSummary;
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{DataSnapshot, DataState};

#[tauri::command]
pub async fn get_dashboard_summary(
    data: State<'_, DataState>,
) -> Result<DashboardSummary, ApiError> {
    debug!("get_dashboard_summary command");
    Ok(data.summary().await)
}

/// All four collections at once, for the renderer's first paint.
#[tauri::command]
pub async fn get_store_snapshot(data: State<'_, DataState>) -> Result<DataSnapshot, ApiError> {
    debug!("get_store_snapshot command");
    Ok(data.snapshot().await)
}
