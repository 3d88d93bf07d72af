//! # Catalog State
//!
//! Crop categories and seasons edited on the crop management screen.
//!
//! These live only for the session: every launch starts from the default
//! categories and seasons, and nothing here touches local storage.

use agri_core::seed::{default_crop_categories, default_seasons};
use agri_core::{
    Collection, CropCategory, CropCategoryPatch, NewCropCategory, NewSeason, Season, SeasonPatch,
};
use tokio::sync::Mutex;

pub struct CatalogState {
    categories: Mutex<Collection<CropCategory>>,
    seasons: Mutex<Collection<Season>>,
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState {
            categories: Mutex::new(Collection::from_records(default_crop_categories())),
            seasons: Mutex::new(Collection::from_records(default_seasons())),
        }
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Crop categories
    // -------------------------------------------------------------------------

    pub async fn categories(&self) -> Vec<CropCategory> {
        self.categories.lock().await.items().to_vec()
    }

    pub async fn search_categories(&self, query: &str) -> Vec<CropCategory> {
        self.categories.lock().await.search(query)
    }

    pub async fn add_category(&self, draft: NewCropCategory) -> CropCategory {
        self.categories.lock().await.add(draft)
    }

    pub async fn update_category(
        &self,
        id: &str,
        patch: CropCategoryPatch,
    ) -> Option<CropCategory> {
        self.categories.lock().await.update(id, patch)
    }

    pub async fn delete_category(&self, id: &str) -> bool {
        self.categories.lock().await.delete(id)
    }

    // -------------------------------------------------------------------------
    // Seasons
    // -------------------------------------------------------------------------

    pub async fn seasons(&self) -> Vec<Season> {
        self.seasons.lock().await.items().to_vec()
    }

    pub async fn search_seasons(&self, query: &str) -> Vec<Season> {
        self.seasons.lock().await.search(query)
    }

    pub async fn add_season(&self, draft: NewSeason) -> Season {
        self.seasons.lock().await.add(draft)
    }

    pub async fn update_season(&self, id: &str, patch: SeasonPatch) -> Option<Season> {
        self.seasons.lock().await.update(id, patch)
    }

    pub async fn delete_season(&self, id: &str) -> bool {
        self.seasons.lock().await.delete(id)
    }
}
