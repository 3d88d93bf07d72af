//! # Catalog Commands
//!
//! Crop category and season tabs of the crop management screen.
//!
//! Category cards carry a crop count taken from the crops collection at the
//! time of the call; it is never stored with the category.

use agri_core::stats::crops_in_category;
use agri_core::validation::{
    validate_crop_category_patch, validate_new_crop_category, validate_new_season,
    validate_search_query, validate_season_patch,
};
use agri_core::{CropCategory, CropCategoryPatch, NewCropCategory, NewSeason, Season, SeasonPatch};
use serde::Serialize;
use tauri::State;
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{CatalogState, DataState};

/// A category plus the number of crops filed under it.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    #[serde(flatten)]
    pub category: CropCategory,
    pub crop_count: usize,
}

async fn with_counts(data: &DataState, categories: Vec<CropCategory>) -> Vec<CategoryCard> {
    let crops = data.crops().await;
    categories
        .into_iter()
        .map(|category| CategoryCard {
            crop_count: crops_in_category(&crops, &category.name),
            category,
        })
        .collect()
}

// =============================================================================
// Crop Categories
// =============================================================================

#[tauri::command]
pub async fn list_crop_categories(
    catalog: State<'_, CatalogState>,
    data: State<'_, DataState>,
) -> Result<Vec<CategoryCard>, ApiError> {
    debug!("list_crop_categories command");
    Ok(with_counts(&data, catalog.categories().await).await)
}

#[tauri::command]
pub async fn search_crop_categories(
    catalog: State<'_, CatalogState>,
    data: State<'_, DataState>,
    query: String,
) -> Result<Vec<CategoryCard>, ApiError> {
    let query = validate_search_query(&query)?;
    debug!(query = %query, "search_crop_categories command");
    Ok(with_counts(&data, catalog.search_categories(&query).await).await)
}

#[tauri::command]
pub async fn add_crop_category(
    catalog: State<'_, CatalogState>,
    draft: NewCropCategory,
) -> Result<CropCategory, ApiError> {
    debug!(name = %draft.name, "add_crop_category command");
    validate_new_crop_category(&draft)?;
    Ok(catalog.add_category(draft).await)
}

#[tauri::command]
pub async fn update_crop_category(
    catalog: State<'_, CatalogState>,
    id: String,
    patch: CropCategoryPatch,
) -> Result<Option<CropCategory>, ApiError> {
    debug!(id = %id, "update_crop_category command");
    validate_crop_category_patch(&patch)?;
    Ok(catalog.update_category(&id, patch).await)
}

/// Crops filed under the category keep their label.
#[tauri::command]
pub async fn delete_crop_category(
    catalog: State<'_, CatalogState>,
    id: String,
) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_crop_category command");
    Ok(catalog.delete_category(&id).await)
}

// =============================================================================
// Seasons
// =============================================================================

#[tauri::command]
pub async fn list_seasons(catalog: State<'_, CatalogState>) -> Result<Vec<Season>, ApiError> {
    debug!("list_seasons command");
    Ok(catalog.seasons().await)
}

#[tauri::command]
pub async fn search_seasons(
    catalog: State<'_, CatalogState>,
    query: String,
) -> Result<Vec<Season>, ApiError> {
    let query = validate_search_query(&query)?;
    debug!(query = %query, "search_seasons command");
    Ok(catalog.search_seasons(&query).await)
}

#[tauri::command]
pub async fn add_season(
    catalog: State<'_, CatalogState>,
    draft: NewSeason,
) -> Result<Season, ApiError> {
    debug!(name = %draft.name, "add_season command");
    validate_new_season(&draft)?;
    Ok(catalog.add_season(draft).await)
}

#[tauri::command]
pub async fn update_season(
    catalog: State<'_, CatalogState>,
    id: String,
    patch: SeasonPatch,
) -> Result<Option<Season>, ApiError> {
    debug!(id = %id, "update_season command");
    validate_season_patch(&patch)?;
    Ok(catalog.update_season(&id, patch).await)
}

#[tauri::command]
pub async fn delete_season(catalog: State<'_, CatalogState>, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_season command");
    Ok(catalog.delete_season(&id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::error::ErrorCode;
    use agri_core::NewCrop;
    use tauri::Manager;

    #[tokio::test]
    async fn test_category_counts_follow_crops() {
        let app = testing::app().await;

        let cards = list_crop_categories(app.state(), app.state()).await.unwrap();
        let cereals = cards.iter().find(|c| c.category.name == "Cereals").unwrap();
        assert_eq!(cereals.crop_count, 3);

        app.state::<DataState>()
            .add_crop(NewCrop {
                name: "Barley".to_string(),
                icon: "🌿".to_string(),
                category: "Cereals".to_string(),
            })
            .await
            .unwrap();

        let cards = search_crop_categories(app.state(), app.state(), "cere".to_string())
            .await
            .unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].crop_count, 4);
    }

    #[tokio::test]
    async fn test_season_months_validated() {
        let app = testing::app().await;
        let draft = NewSeason {
            name: "Late Kharif".to_string(),
            start_month: "Julyish".to_string(),
            end_month: "November".to_string(),
            description: "Second sowing".to_string(),
            icon: "🌦️".to_string(),
        };

        let err = add_season(app.state(), draft.clone()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let season = add_season(
            app.state(),
            NewSeason {
                start_month: "July".to_string(),
                ..draft
            },
        )
        .await
        .unwrap();
        assert_eq!(list_seasons(app.state()).await.unwrap().last(), Some(&season));
    }
}
