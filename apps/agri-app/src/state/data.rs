//! # Data State
//!
//! The record store: crops, soil types, weather records and users, each
//! mirrored to local storage on every change.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    DataState::add_crop(draft)                           │
//! │                                                                         │
//! │  lock store ──► clone Collection<Crop> ──► add(draft) on the clone      │
//! │                                                │                        │
//! │                                                ▼                        │
//! │                               collections().save(&clone)                │
//! │                                   │                    │                │
//! │                                 Ok(())               Err(e)             │
//! │                                   │                    │                │
//! │                                   ▼                    ▼                │
//! │                        store.crops = clone     store unchanged,         │
//! │                        return new crop         return DbError           │
//! │                                                                         │
//! │  The lock is held for the whole sequence, so memory and storage never   │
//! │  disagree as seen by another caller.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Update and delete of a missing id change nothing and skip the write.

use agri_core::{
    Collection, Crop, CropPatch, DashboardSummary, NewCrop, NewSoilType, NewUser,
    NewWeatherRecord, SoilType, SoilTypePatch, StoredRecord, User, UserListKind, UserPatch,
    WeatherRecord, WeatherRecordPatch, WeatherSummary,
};
use agri_db::{Database, DbResult, LoadSource};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};
use ts_rs::TS;

/// The four persisted collections.
#[derive(Debug, Clone, Default)]
struct Store {
    crops: Collection<Crop>,
    soil_types: Collection<SoilType>,
    weather: Collection<WeatherRecord>,
    users: Collection<User>,
}

/// Picks the collection for a record type out of the store.
trait StoreSlot: StoredRecord {
    fn slot(store: &mut Store) -> &mut Collection<Self>;
}

impl StoreSlot for Crop {
    fn slot(store: &mut Store) -> &mut Collection<Self> {
        &mut store.crops
    }
}

impl StoreSlot for SoilType {
    fn slot(store: &mut Store) -> &mut Collection<Self> {
        &mut store.soil_types
    }
}

impl StoreSlot for WeatherRecord {
    fn slot(store: &mut Store) -> &mut Collection<Self> {
        &mut store.weather
    }
}

impl StoreSlot for User {
    fn slot(store: &mut Store) -> &mut Collection<Self> {
        &mut store.users
    }
}

/// Every persisted record, as one payload.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot {
    pub crops: Vec<Crop>,
    pub soil_types: Vec<SoilType>,
    pub weather: Vec<WeatherRecord>,
    pub users: Vec<User>,
}

/// The record store service.
///
/// Cloned `Database` handles share one pool, so a host can keep its own
/// handle for shutdown.
pub struct DataState {
    db: Database,
    store: Mutex<Store>,
}

impl DataState {
    /// Loads every collection from storage.
    ///
    /// Never fails: absent or unreadable collections fall back to their
    /// seed data.
    pub async fn load(db: Database) -> Self {
        let repo = db.collections();

        let crops = repo.load::<Crop>().await;
        let soil_types = repo.load::<SoilType>().await;
        let weather = repo.load::<WeatherRecord>().await;
        let users = repo.load::<User>().await;

        let recovered = [crops.source, soil_types.source, weather.source, users.source]
            .iter()
            .filter(|source| **source == LoadSource::Recovered)
            .count();

        info!(
            crops = crops.collection.len(),
            soil_types = soil_types.collection.len(),
            weather = weather.collection.len(),
            users = users.collection.len(),
            recovered,
            "Store loaded"
        );

        DataState {
            db,
            store: Mutex::new(Store {
                crops: crops.collection,
                soil_types: soil_types.collection,
                weather: weather.collection,
                users: users.collection,
            }),
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    // -------------------------------------------------------------------------
    // Generic access
    // -------------------------------------------------------------------------

    async fn read<T: StoreSlot, R>(&self, f: impl FnOnce(&Collection<T>) -> R) -> R {
        let mut store = self.store.lock().await;
        f(&*T::slot(&mut store))
    }

    /// Applies `f` to a copy of the collection; the copy is saved and
    /// committed only when `f` reports a change.
    async fn mutate<T: StoreSlot, R>(
        &self,
        f: impl FnOnce(&mut Collection<T>) -> (R, bool),
    ) -> DbResult<R> {
        let mut store = self.store.lock().await;
        let slot = T::slot(&mut store);

        let mut next = slot.clone();
        let (out, changed) = f(&mut next);
        if changed {
            self.db.collections().save(&next).await?;
            *slot = next;
        }
        Ok(out)
    }

    async fn all<T: StoreSlot>(&self) -> Vec<T> {
        self.read(|c: &Collection<T>| c.items().to_vec()).await
    }

    async fn add<T: StoreSlot>(&self, draft: T::Draft) -> DbResult<T> {
        let record = self.mutate(|c: &mut Collection<T>| (c.add(draft), true)).await?;
        debug!(key = T::STORAGE_KEY, id = %record.id(), "Record added");
        Ok(record)
    }

    async fn update<T: StoreSlot>(&self, id: &str, patch: T::Patch) -> DbResult<Option<T>> {
        self.mutate(|c: &mut Collection<T>| {
            let updated = c.update(id, patch);
            let changed = updated.is_some();
            (updated, changed)
        })
        .await
    }

    async fn delete<T: StoreSlot>(&self, id: &str) -> DbResult<bool> {
        self.mutate(|c: &mut Collection<T>| {
            let removed = c.delete(id);
            (removed, removed)
        })
        .await
    }

    async fn search<T: StoreSlot>(&self, query: &str) -> Vec<T> {
        self.read(|c: &Collection<T>| c.search(query)).await
    }

    // -------------------------------------------------------------------------
    // Crops
    // -------------------------------------------------------------------------

    pub async fn crops(&self) -> Vec<Crop> {
        self.all().await
    }

    pub async fn add_crop(&self, draft: NewCrop) -> DbResult<Crop> {
        self.add(draft).await
    }

    pub async fn update_crop(&self, id: &str, patch: CropPatch) -> DbResult<Option<Crop>> {
        self.update(id, patch).await
    }

    pub async fn delete_crop(&self, id: &str) -> DbResult<bool> {
        self.delete::<Crop>(id).await
    }

    pub async fn search_crops(&self, query: &str) -> Vec<Crop> {
        self.search(query).await
    }

    // -------------------------------------------------------------------------
    // Soil types
    // -------------------------------------------------------------------------

    pub async fn soil_types(&self) -> Vec<SoilType> {
        self.all().await
    }

    pub async fn add_soil_type(&self, draft: NewSoilType) -> DbResult<SoilType> {
        self.add(draft).await
    }

    pub async fn update_soil_type(
        &self,
        id: &str,
        patch: SoilTypePatch,
    ) -> DbResult<Option<SoilType>> {
        self.update(id, patch).await
    }

    pub async fn delete_soil_type(&self, id: &str) -> DbResult<bool> {
        self.delete::<SoilType>(id).await
    }

    pub async fn search_soil_types(&self, query: &str) -> Vec<SoilType> {
        self.search(query).await
    }

    // -------------------------------------------------------------------------
    // Weather
    // -------------------------------------------------------------------------

    pub async fn weather(&self) -> Vec<WeatherRecord> {
        self.all().await
    }

    pub async fn add_weather(&self, draft: NewWeatherRecord) -> DbResult<WeatherRecord> {
        self.add(draft).await
    }

    pub async fn update_weather(
        &self,
        id: &str,
        patch: WeatherRecordPatch,
    ) -> DbResult<Option<WeatherRecord>> {
        self.update(id, patch).await
    }

    pub async fn delete_weather(&self, id: &str) -> DbResult<bool> {
        self.delete::<WeatherRecord>(id).await
    }

    pub async fn search_weather(&self, query: &str) -> Vec<WeatherRecord> {
        self.search(query).await
    }

    pub async fn weather_summary(&self) -> WeatherSummary {
        self.read(|c: &Collection<WeatherRecord>| WeatherSummary::from_records(c.items()))
            .await
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    pub async fn users(&self) -> Vec<User> {
        self.all().await
    }

    pub async fn add_user(&self, draft: NewUser) -> DbResult<User> {
        self.add(draft).await
    }

    pub async fn update_user(&self, id: &str, patch: UserPatch) -> DbResult<Option<User>> {
        self.update(id, patch).await
    }

    pub async fn delete_user(&self, id: &str) -> DbResult<bool> {
        self.delete::<User>(id).await
    }

    pub async fn search_users(&self, query: &str) -> Vec<User> {
        self.search(query).await
    }

    /// Users shown on one of the user management screens.
    pub async fn users_by_kind(&self, kind: UserListKind, query: &str) -> Vec<User> {
        self.search::<User>(query)
            .await
            .into_iter()
            .filter(|user| kind.includes(user.role))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Whole store
    // -------------------------------------------------------------------------

    pub async fn snapshot(&self) -> DataSnapshot {
        let store = self.store.lock().await;
        DataSnapshot {
            crops: store.crops.items().to_vec(),
            soil_types: store.soil_types.items().to_vec(),
            weather: store.weather.items().to_vec(),
            users: store.users.items().to_vec(),
        }
    }

    pub async fn summary(&self) -> DashboardSummary {
        let store = self.store.lock().await;
        DashboardSummary::compute(
            store.crops.items(),
            store.soil_types.items(),
            store.weather.items(),
            store.users.items(),
        )
    }
}
