//! # Soil Type Commands

use agri_core::validation::{
    validate_new_soil_type, validate_search_query, validate_soil_type_patch,
};
use agri_core::{NewSoilType, SoilType, SoilTypePatch};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DataState;

#[tauri::command]
pub async fn list_soil_types(data: State<'_, DataState>) -> Result<Vec<SoilType>, ApiError> {
    debug!("list_soil_types command");
    Ok(data.soil_types().await)
}

#[tauri::command]
pub async fn search_soil_types(
    data: State<'_, DataState>,
    query: String,
) -> Result<Vec<SoilType>, ApiError> {
    let query = validate_search_query(&query)?;
    debug!(query = %query, "search_soil_types command");
    Ok(data.search_soil_types(&query).await)
}

#[tauri::command]
pub async fn add_soil_type(
    data: State<'_, DataState>,
    draft: NewSoilType,
) -> Result<SoilType, ApiError> {
    debug!(name = %draft.name, "add_soil_type command");
    validate_new_soil_type(&draft)?;
    Ok(data.add_soil_type(draft).await?)
}

#[tauri::command]
pub async fn update_soil_type(
    data: State<'_, DataState>,
    id: String,
    patch: SoilTypePatch,
) -> Result<Option<SoilType>, ApiError> {
    debug!(id = %id, "update_soil_type command");
    validate_soil_type_patch(&patch)?;
    Ok(data.update_soil_type(&id, patch).await?)
}

#[tauri::command]
pub async fn delete_soil_type(data: State<'_, DataState>, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_soil_type command");
    Ok(data.delete_soil_type(&id).await?)
}
