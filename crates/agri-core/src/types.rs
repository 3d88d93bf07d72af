//! # Domain Types
//!
//! Record types held by the store, plus the drafts and patches screens use
//! to create and edit them.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Stored (durable)                                                       │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │    Crop      │ │   SoilType   │ │WeatherRecord │ │     User     │   │
//! │  │ id           │ │ id           │ │ id           │ │ id           │   │
//! │  │ name         │ │ name         │ │ location     │ │ name, email  │   │
//! │  │ icon         │ │ icon         │ │ temperature  │ │ phone, role  │   │
//! │  │ category     │ │              │ │ humidity ... │ │ status       │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ │ createdAt    │   │
//! │                                                      └──────────────┘   │
//! │  Session-scoped (admin screens only)                                   │
//! │  ┌──────────────┐ ┌──────────────┐                                     │
//! │  │ CropCategory │ │    Season    │                                     │
//! │  └──────────────┘ └──────────────┘                                     │
//! │                                                                         │
//! │  Each record has a `New*` draft (no id) and a `*Patch` (all optional). │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stored records serialize with camelCase field names so that the JSON
//! arrays in local storage keep the same shape the web build wrote.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::collection::{Record, StoredRecord};
use crate::error::ValidationError;
use crate::seed;

// =============================================================================
// Crop
// =============================================================================

/// A crop a farmer can pick on the input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: String,
    pub name: String,
    /// Short display token, usually an emoji.
    pub icon: String,
    /// Free-text category label ("Cereals", "Fiber", ...).
    pub category: String,
}

/// Fields for a new crop (the id is generated by the collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewCrop {
    pub name: String,
    pub icon: String,
    pub category: String,
}

/// Partial crop update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CropPatch {
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(optional)]
    pub icon: Option<String>,
    #[ts(optional)]
    pub category: Option<String>,
}

impl Record for Crop {
    type Draft = NewCrop;
    type Patch = CropPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewCrop) -> Self {
        Crop {
            id,
            name: draft.name,
            icon: draft.icon,
            category: draft.category,
        }
    }

    fn apply(&mut self, patch: CropPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl StoredRecord for Crop {
    const STORAGE_KEY: &'static str = "crops";

    fn seed() -> Vec<Self> {
        seed::default_crops()
    }
}

// =============================================================================
// Soil Type
// =============================================================================

/// A soil type a farmer can pick on the input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SoilType {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSoilType {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct SoilTypePatch {
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(optional)]
    pub icon: Option<String>,
}

impl Record for SoilType {
    type Draft = NewSoilType;
    type Patch = SoilTypePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewSoilType) -> Self {
        SoilType {
            id,
            name: draft.name,
            icon: draft.icon,
        }
    }

    fn apply(&mut self, patch: SoilTypePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl StoredRecord for SoilType {
    const STORAGE_KEY: &'static str = "soil_types";

    fn seed() -> Vec<Self> {
        seed::default_soil_types()
    }
}

// =============================================================================
// Weather Record
// =============================================================================

/// A weather observation for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub id: String,
    pub location: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Millimetres.
    pub rainfall: f64,
    /// Condition label ("Sunny", "Partly Cloudy", ...).
    pub condition: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewWeatherRecord {
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub condition: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherRecordPatch {
    #[ts(optional)]
    pub location: Option<String>,
    #[ts(optional)]
    pub temperature: Option<f64>,
    #[ts(optional)]
    pub humidity: Option<f64>,
    #[ts(optional)]
    pub rainfall: Option<f64>,
    #[ts(optional)]
    pub condition: Option<String>,
    #[ts(as = "Option<String>")]
    pub date: Option<DateTime<Utc>>,
}

impl Record for WeatherRecord {
    type Draft = NewWeatherRecord;
    type Patch = WeatherRecordPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewWeatherRecord) -> Self {
        WeatherRecord {
            id,
            location: draft.location,
            temperature: draft.temperature,
            humidity: draft.humidity,
            rainfall: draft.rainfall,
            condition: draft.condition,
            date: draft.date,
        }
    }

    fn apply(&mut self, patch: WeatherRecordPatch) {
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(temperature) = patch.temperature {
            self.temperature = temperature;
        }
        if let Some(humidity) = patch.humidity {
            self.humidity = humidity;
        }
        if let Some(rainfall) = patch.rainfall {
            self.rainfall = rainfall;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.location.to_lowercase().contains(needle)
            || self.condition.to_lowercase().contains(needle)
    }
}

impl StoredRecord for WeatherRecord {
    const STORAGE_KEY: &'static str = "weather";

    fn seed() -> Vec<Self> {
        seed::default_weather()
    }
}

// =============================================================================
// User
// =============================================================================

/// Role stored on a user account.
///
/// This is account data managed from the admin screens; it is unrelated to
/// the session [`Role`](crate::navigation::Role) chosen at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Farmer,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Farmer, UserRole::Admin, UserRole::SuperAdmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "superadmin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an account is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Assigned at creation, never changed afterwards.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
}

/// Partial user update. There is no `created_at` field: it is immutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(optional)]
    pub email: Option<String>,
    #[ts(optional)]
    pub phone: Option<String>,
    #[ts(optional)]
    pub role: Option<UserRole>,
    #[ts(optional)]
    pub status: Option<UserStatus>,
}

impl Record for User {
    type Draft = NewUser;
    type Patch = UserPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewUser) -> Self {
        User {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            role: draft.role,
            status: draft.status,
            created_at: Utc::now(),
        }
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.phone.to_lowercase().contains(needle)
    }
}

impl StoredRecord for User {
    const STORAGE_KEY: &'static str = "users";

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

// =============================================================================
// Crop Category (session-scoped)
// =============================================================================

/// A crop category card on the admin crop-management screen.
///
/// The crop count shown on the card is not stored here; it is computed from
/// the crops collection with [`crate::stats::category_counts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CropCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewCropCategory {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CropCategoryPatch {
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(optional)]
    pub description: Option<String>,
    #[ts(optional)]
    pub icon: Option<String>,
}

impl Record for CropCategory {
    type Draft = NewCropCategory;
    type Patch = CropCategoryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewCropCategory) -> Self {
        CropCategory {
            id,
            name: draft.name,
            description: draft.description,
            icon: draft.icon,
        }
    }

    fn apply(&mut self, patch: CropCategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Season (session-scoped)
// =============================================================================

/// A growing season (Kharif, Rabi, ...), bounded by month names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: String,
    pub name: String,
    pub start_month: String,
    pub end_month: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSeason {
    pub name: String,
    pub start_month: String,
    pub end_month: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonPatch {
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(optional)]
    pub start_month: Option<String>,
    #[ts(optional)]
    pub end_month: Option<String>,
    #[ts(optional)]
    pub description: Option<String>,
    #[ts(optional)]
    pub icon: Option<String>,
}

impl Record for Season {
    type Draft = NewSeason;
    type Patch = SeasonPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewSeason) -> Self {
        Season {
            id,
            name: draft.name,
            start_month: draft.start_month,
            end_month: draft.end_month,
            description: draft.description,
            icon: draft.icon,
        }
    }

    fn apply(&mut self, patch: SeasonPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start_month) = patch.start_month {
            self.start_month = start_month;
        }
        if let Some(end_month) = patch.end_month {
            self.end_month = end_month;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Field Size
// =============================================================================

/// Field size band offered on the crop input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FieldSize {
    #[serde(rename = "1-5 acres")]
    OneToFive,
    #[serde(rename = "5-10 acres")]
    FiveToTen,
    #[serde(rename = "10-20 acres")]
    TenToTwenty,
    #[serde(rename = "20+ acres")]
    OverTwenty,
}

impl FieldSize {
    pub const ALL: [FieldSize; 4] = [
        FieldSize::OneToFive,
        FieldSize::FiveToTen,
        FieldSize::TenToTwenty,
        FieldSize::OverTwenty,
    ];

    /// The label shown on the band's button.
    pub fn label(&self) -> &'static str {
        match self {
            FieldSize::OneToFive => "1-5 acres",
            FieldSize::FiveToTen => "5-10 acres",
            FieldSize::TenToTwenty => "10-20 acres",
            FieldSize::OverTwenty => "20+ acres",
        }
    }
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FieldSize::ALL
            .into_iter()
            .find(|band| band.label() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "fieldSize".to_string(),
                allowed: FieldSize::ALL.iter().map(|b| b.label().to_string()).collect(),
            })
    }
}

// =============================================================================
// Prediction Input
// =============================================================================

/// Draft state of the crop input form, exactly as typed/selected.
///
/// Lives only in the screen until submit; never part of the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictionInput {
    /// Id of a crop from the store (not checked against it).
    pub crop_id: String,
    /// Field size band label, e.g. "5-10 acres".
    pub field_size: String,
    /// Id of a soil type from the store (not checked against it).
    pub soil_type_id: String,
    /// Free-text location.
    pub location: String,
}

impl PredictionInput {
    /// True when every field is non-empty; drives the submit button state.
    pub fn is_complete(&self) -> bool {
        [
            &self.crop_id,
            &self.field_size,
            &self.soil_type_id,
            &self.location,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }
}

/// A submitted, validated prediction request shown on the result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub crop_id: String,
    pub field_size: FieldSize,
    pub soil_type_id: String,
    pub location: String,
}

// =============================================================================
// Language
// =============================================================================

/// Display language offered by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "od")]
    Odia,
    #[serde(rename = "bn")]
    Bengali,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Marathi,
        Language::Tamil,
        Language::Odia,
        Language::Bengali,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Tamil => "ta",
            Language::Odia => "od",
            Language::Bengali => "bn",
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Marathi => "मराठी",
            Language::Tamil => "தமிழ்",
            Language::Odia => "ଓଡ଼ିଆ",
            Language::Bengali => "বাংলা",
        }
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "language".to_string(),
                allowed: Language::ALL.iter().map(|l| l.code().to_string()).collect(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_patch_overwrites_only_given_fields() {
        let mut crop = Crop {
            id: "1".to_string(),
            name: "Wheat".to_string(),
            icon: "🌾".to_string(),
            category: "Cereals".to_string(),
        };

        crop.apply(CropPatch {
            category: Some("Grains".to_string()),
            ..Default::default()
        });

        assert_eq!(crop.id, "1");
        assert_eq!(crop.name, "Wheat");
        assert_eq!(crop.category, "Grains");
    }

    #[test]
    fn test_user_created_at_survives_patch() {
        let mut user = User::from_draft(
            "u1".to_string(),
            NewUser {
                name: "Ramesh".to_string(),
                email: "ramesh@example.com".to_string(),
                phone: "+91 98765 43210".to_string(),
                role: UserRole::Farmer,
                status: UserStatus::Active,
            },
        );
        let created = user.created_at;

        user.apply(UserPatch {
            status: Some(UserStatus::Inactive),
            ..Default::default()
        });

        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.created_at, created);
    }

    #[test]
    fn test_stored_json_uses_camel_case() {
        let user = User::from_draft(
            "u1".to_string(),
            NewUser {
                name: "Priya".to_string(),
                email: "priya@example.com".to_string(),
                phone: "123".to_string(),
                role: UserRole::SuperAdmin,
                status: UserStatus::Inactive,
            },
        );
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("createdAt").is_some());
        assert_eq!(json["role"], "superadmin");
        assert_eq!(json["status"], "inactive");
    }

    #[test]
    fn test_reads_web_storage_shape() {
        let raw = r#"[{"id":"1","location":"Mumbai","temperature":32,"humidity":65,
            "rainfall":120,"condition":"Partly Cloudy","date":"2025-01-15T10:30:00.000Z"}]"#;
        let records: Vec<WeatherRecord> = serde_json::from_str(raw).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, "Mumbai");
        assert!((records[0].temperature - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_field_size_parse() {
        assert_eq!("5-10 acres".parse::<FieldSize>().unwrap(), FieldSize::FiveToTen);
        assert_eq!(" 20+ acres ".parse::<FieldSize>().unwrap(), FieldSize::OverTwenty);
        assert!("huge".parse::<FieldSize>().is_err());
    }

    #[test]
    fn test_field_size_serializes_as_label() {
        let json = serde_json::to_string(&FieldSize::TenToTwenty).unwrap();
        assert_eq!(json, "\"10-20 acres\"");
    }

    #[test]
    fn test_prediction_input_completeness() {
        let mut input = PredictionInput {
            crop_id: "1".to_string(),
            field_size: "1-5 acres".to_string(),
            soil_type_id: "3".to_string(),
            location: String::new(),
        };
        assert!(!input.is_complete());

        input.location = "   ".to_string();
        assert!(!input.is_complete());

        input.location = "Nashik".to_string();
        assert!(input.is_complete());
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hindi);
        assert_eq!("OD".parse::<Language>().unwrap(), Language::Odia);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default().code(), "en");
    }
}
