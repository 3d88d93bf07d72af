//! # Weather Commands
//!
//! Weather management screen: record list, search, the add/edit dialog and
//! the summary cards above the table.

use agri_core::validation::{
    validate_new_weather_record, validate_search_query, validate_weather_record_patch,
};
use agri_core::{NewWeatherRecord, WeatherRecord, WeatherRecordPatch, WeatherSummary};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DataState;

#[tauri::command]
pub async fn list_weather(data: State<'_, DataState>) -> Result<Vec<WeatherRecord>, ApiError> {
    debug!("list_weather command");
    Ok(data.weather().await)
}

/// Records whose location or condition contains `query`.
#[tauri::command]
pub async fn search_weather(
    data: State<'_, DataState>,
    query: String,
) -> Result<Vec<WeatherRecord>, ApiError> {
    let query = validate_search_query(&query)?;
    debug!(query = %query, "search_weather command");
    Ok(data.search_weather(&query).await)
}

#[tauri::command]
pub async fn add_weather(
    data: State<'_, DataState>,
    draft: NewWeatherRecord,
) -> Result<WeatherRecord, ApiError> {
    debug!(location = %draft.location, "add_weather command");
    validate_new_weather_record(&draft)?;
    Ok(data.add_weather(draft).await?)
}

#[tauri::command]
pub async fn update_weather(
    data: State<'_, DataState>,
    id: String,
    patch: WeatherRecordPatch,
) -> Result<Option<WeatherRecord>, ApiError> {
    debug!(id = %id, "update_weather command");
    validate_weather_record_patch(&patch)?;
    Ok(data.update_weather(&id, patch).await?)
}

#[tauri::command]
pub async fn delete_weather(data: State<'_, DataState>, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_weather command");
    Ok(data.delete_weather(&id).await?)
}

/// Averages and totals over the current records.
#[tauri::command]
pub async fn get_weather_summary(data: State<'_, DataState>) -> Result<WeatherSummary, ApiError> {
    debug!("get_weather_summary command");
    Ok(data.weather_summary().await)
}
