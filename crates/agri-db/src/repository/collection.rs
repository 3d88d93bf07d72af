//! # Collection Repository
//!
//! Loads and saves whole collections under their fixed storage keys.
//!
//! ## Loading
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  load::<T>() never fails                                │
//! │                                                                         │
//! │  storage.get(T::STORAGE_KEY)                                           │
//! │       │                                                                 │
//! │       ├── Ok(Some(json)) ── parses ──────────► Stored(collection)      │
//! │       │                  └─ corrupt ──┐                                 │
//! │       ├── Err(_) ─────────────────────┴──────► Recovered(seed)         │
//! │       │                                         warn!, storage kept    │
//! │       └── Ok(None) ──────────────────────────► Seeded(seed)            │
//! │                                                 seed written back      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Corrupt values are left in place so they can be inspected; the next
//! successful mutation of that collection overwrites them.

use agri_core::{Collection, StoredRecord};
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::repository::local_storage::LocalStorageRepository;

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from storage.
    Stored,
    /// Key was absent; seed data used and written back.
    Seeded,
    /// Storage was unreadable or corrupt; seed data used, storage untouched.
    Recovered,
}

/// What [`CollectionRepository::seed`] did with one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Data was already stored and `force` was off.
    Skipped,
    /// Seed data written; holds the record count.
    Written(usize),
}

#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub collection: Collection<T>,
    pub source: LoadSource,
}

#[derive(Debug, Clone)]
pub struct CollectionRepository {
    storage: LocalStorageRepository,
}

impl CollectionRepository {
    pub fn new(storage: LocalStorageRepository) -> Self {
        CollectionRepository { storage }
    }

    /// Loads the collection for `T`, falling back to its seed data.
    pub async fn load<T: StoredRecord>(&self) -> Loaded<T> {
        let key = T::STORAGE_KEY;

        match self.read::<T>().await {
            Ok(Some(collection)) => {
                debug!(key, records = collection.len(), "Loaded collection");
                Loaded {
                    collection,
                    source: LoadSource::Stored,
                }
            }
            Ok(None) => {
                let collection = Collection::seeded();
                if let Err(e) = self.save(&collection).await {
                    warn!(key, error = %e, "Could not write seed data back to storage");
                }
                info!(key, records = collection.len(), "Seeded empty collection");
                Loaded {
                    collection,
                    source: LoadSource::Seeded,
                }
            }
            Err(e) => {
                warn!(key, error = %e, "Stored collection unusable, using seed data");
                Loaded {
                    collection: Collection::seeded(),
                    source: LoadSource::Recovered,
                }
            }
        }
    }

    /// Reads and parses the collection for `T` without any fallback.
    pub async fn read<T: StoredRecord>(&self) -> DbResult<Option<Collection<T>>> {
        let key = T::STORAGE_KEY;
        let Some(raw) = self.storage.get(key).await? else {
            return Ok(None);
        };

        let records: Vec<T> =
            serde_json::from_str(&raw).map_err(|e| DbError::serialization(key, e))?;
        let stored = records.len();
        let collection = Collection::from_records(records);
        if collection.len() < stored {
            warn!(
                key,
                dropped = stored - collection.len(),
                "Stored collection had duplicate ids, keeping the first of each"
            );
        }
        Ok(Some(collection))
    }

    /// Rewrites the stored array for `T` in full.
    pub async fn save<T: StoredRecord>(&self, collection: &Collection<T>) -> DbResult<()> {
        let key = T::STORAGE_KEY;
        let json =
            serde_json::to_string(collection).map_err(|e| DbError::serialization(key, e))?;
        self.storage.set(key, &json).await
    }

    /// Overwrites the stored collection for `T` with its seed data.
    pub async fn reset<T: StoredRecord>(&self) -> DbResult<Collection<T>> {
        let collection = Collection::seeded();
        self.save(&collection).await?;
        Ok(collection)
    }

    /// Writes the seed data for `T` unless data is already stored.
    ///
    /// With `force`, existing data is replaced.
    pub async fn seed<T: StoredRecord>(&self, force: bool) -> DbResult<SeedOutcome> {
        if !force && self.is_stored::<T>().await? {
            debug!(key = T::STORAGE_KEY, "Already stored, seed skipped");
            return Ok(SeedOutcome::Skipped);
        }

        let collection = self.reset::<T>().await?;
        info!(key = T::STORAGE_KEY, records = collection.len(), "Seed data written");
        Ok(SeedOutcome::Written(collection.len()))
    }

    pub async fn is_stored<T: StoredRecord>(&self) -> DbResult<bool> {
        Ok(self.storage.get(T::STORAGE_KEY).await?.is_some())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use agri_core::{Crop, NewCrop, NewSoilType, SoilType, User, WeatherRecord};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_absent_key_seeds_and_writes_back() {
        let db = db().await;
        let repo = db.collections();

        let loaded = repo.load::<Crop>().await;
        assert_eq!(loaded.source, LoadSource::Seeded);
        assert_eq!(loaded.collection.len(), 6);
        assert!(repo.is_stored::<Crop>().await.unwrap());

        let again = repo.load::<Crop>().await;
        assert_eq!(again.source, LoadSource::Stored);
        assert_eq!(again.collection, loaded.collection);
    }

    #[tokio::test]
    async fn test_users_seed_empty() {
        let db = db().await;
        let loaded = db.collections().load::<User>().await;

        assert_eq!(loaded.source, LoadSource::Seeded);
        assert!(loaded.collection.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_value_recovers_without_overwriting() {
        let db = db().await;
        db.local_storage()
            .set("soil_types", "{not json")
            .await
            .unwrap();

        let loaded = db.collections().load::<SoilType>().await;
        assert_eq!(loaded.source, LoadSource::Recovered);
        assert_eq!(loaded.collection.len(), 4);

        let raw = db.local_storage().get("soil_types").await.unwrap();
        assert_eq!(raw.as_deref(), Some("{not json"));
    }

    #[tokio::test]
    async fn test_wrong_shape_recovers() {
        let db = db().await;
        db.local_storage()
            .set("weather", r#"[{"id":"1","location":"Pune"}]"#)
            .await
            .unwrap();

        let loaded = db.collections().load::<WeatherRecord>().await;
        assert_eq!(loaded.source, LoadSource::Recovered);
        assert_eq!(loaded.collection.len(), 2);
    }

    #[tokio::test]
    async fn test_read_failure_recovers() {
        let db = db().await;
        db.close().await;

        let loaded = db.collections().load::<Crop>().await;
        assert_eq!(loaded.source, LoadSource::Recovered);
        assert_eq!(loaded.collection.len(), 6);
    }

    #[tokio::test]
    async fn test_save_then_reload_round_trip() {
        let db = db().await;
        let repo = db.collections();

        let mut crops = repo.load::<Crop>().await.collection;
        crops.add(NewCrop {
            name: "Barley".to_string(),
            icon: "🌿".to_string(),
            category: "Cereals".to_string(),
        });
        crops.delete("3");
        repo.save(&crops).await.unwrap();

        let reloaded = repo.load::<Crop>().await;
        assert_eq!(reloaded.source, LoadSource::Stored);
        assert_eq!(reloaded.collection, crops);
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let db = db().await;
        let repo = db.collections();

        let mut soils = repo.load::<SoilType>().await.collection;
        soils.add(NewSoilType {
            name: "Alluvial Soil".to_string(),
            icon: "🟧".to_string(),
        });
        repo.save(&soils).await.unwrap();

        let reset = repo.reset::<SoilType>().await.unwrap();
        assert_eq!(reset.len(), 4);
        assert_eq!(repo.load::<SoilType>().await.collection, reset);
    }

    #[tokio::test]
    async fn test_seed_keeps_existing_data_without_force() {
        let db = db().await;
        let repo = db.collections();
        db.local_storage()
            .set("crops", r#"[{"id":"9","name":"Millet","icon":"🌾","category":"Cereals"}]"#)
            .await
            .unwrap();

        assert_eq!(repo.seed::<Crop>(false).await.unwrap(), SeedOutcome::Skipped);

        let crops = repo.read::<Crop>().await.unwrap().unwrap();
        assert_eq!(crops.len(), 1);
        assert_eq!(crops.items()[0].name, "Millet");
    }

    #[tokio::test]
    async fn test_seed_with_force_replaces_data() {
        let db = db().await;
        let repo = db.collections();
        db.local_storage()
            .set("crops", r#"[{"id":"9","name":"Millet","icon":"🌾","category":"Cereals"}]"#)
            .await
            .unwrap();

        assert_eq!(repo.seed::<Crop>(true).await.unwrap(), SeedOutcome::Written(6));

        let crops = repo.read::<Crop>().await.unwrap().unwrap();
        assert_eq!(crops, Collection::seeded());
    }

    #[tokio::test]
    async fn test_seed_writes_absent_collection() {
        let db = db().await;
        let repo = db.collections();

        assert_eq!(repo.seed::<User>(false).await.unwrap(), SeedOutcome::Written(0));
        assert!(repo.is_stored::<User>().await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_ids_keep_first() {
        let db = db().await;
        db.local_storage()
            .set(
                "soil_types",
                r#"[{"id":"1","name":"Clay Soil","icon":"🟫"},{"id":"1","name":"Peat","icon":"⬛"}]"#,
            )
            .await
            .unwrap();

        let soils = db.collections().read::<SoilType>().await.unwrap().unwrap();
        assert_eq!(soils.len(), 1);
        assert_eq!(soils.items()[0].name, "Clay Soil");
    }
}
