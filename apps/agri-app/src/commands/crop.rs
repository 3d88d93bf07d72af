//! # Crop Commands
//!
//! Crop list, search and the admin crop dialogs.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add Crop Dialog                                      │
//! │                                                                         │
//! │  Admin fills { name: "Barley", icon: "🌿", category: "Cereals" }       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('add_crop', { draft })                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_new_crop ── name/category missing? ──► VALIDATION_ERROR       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataState::add_crop ── id assigned, list + storage updated             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Returns the stored Crop (with its id)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use agri_core::validation::{validate_crop_patch, validate_new_crop, validate_search_query};
use agri_core::{Crop, CropPatch, NewCrop};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DataState;

/// Every crop, in insertion order.
#[tauri::command]
pub async fn list_crops(data: State<'_, DataState>) -> Result<Vec<Crop>, ApiError> {
    debug!("list_crops command");
    Ok(data.crops().await)
}

/// Crops whose name contains `query` (case-insensitive).
///
/// An empty query returns every crop.
#[tauri::command]
pub async fn search_crops(
    data: State<'_, DataState>,
    query: String,
) -> Result<Vec<Crop>, ApiError> {
    let query = validate_search_query(&query)?;
    debug!(query = %query, "search_crops command");
    Ok(data.search_crops(&query).await)
}

#[tauri::command]
pub async fn add_crop(data: State<'_, DataState>, draft: NewCrop) -> Result<Crop, ApiError> {
    debug!(name = %draft.name, category = %draft.category, "add_crop command");
    validate_new_crop(&draft)?;
    Ok(data.add_crop(draft).await?)
}

/// Merges `patch` into the crop with `id`.
///
/// ## Returns
/// The updated crop, or `None` when no crop has that id.
#[tauri::command]
pub async fn update_crop(
    data: State<'_, DataState>,
    id: String,
    patch: CropPatch,
) -> Result<Option<Crop>, ApiError> {
    debug!(id = %id, "update_crop command");
    validate_crop_patch(&patch)?;
    Ok(data.update_crop(&id, patch).await?)
}

/// Removes the crop with `id`. Returns whether one was removed.
#[tauri::command]
pub async fn delete_crop(data: State<'_, DataState>, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_crop command");
    Ok(data.delete_crop(&id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::error::ErrorCode;
    use tauri::Manager;

    #[tokio::test]
    async fn test_add_requires_category() {
        let app = testing::app().await;
        let draft = NewCrop {
            name: "Barley".to_string(),
            icon: "🌿".to_string(),
            category: " ".to_string(),
        };

        let err = add_crop(app.state(), draft).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list_crops(app.state()).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let app = testing::app().await;
        let found = search_crops(app.state(), "  RICE ".to_string()).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Rice");
    }

    #[tokio::test]
    async fn test_long_query_matches_nothing() {
        let app = testing::app().await;
        let found = search_crops(app.state(), "w".repeat(101)).await.unwrap();
        assert!(found.is_empty());
    }
}
