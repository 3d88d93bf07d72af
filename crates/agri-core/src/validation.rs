//! # Validation Module
//!
//! Form checks run by the command layer before a draft reaches the store.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Renderer                                                               │
//! │  └── Disables submit until every field has a value                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Command layer (agri-app)                                               │
//! │  └── THIS MODULE: required fields, ranges, formats                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Collection (agri-core)                                                 │
//! │  └── No checks at all: add never fails                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use agri_core::validation::validate_search_query;
//!
//! assert_eq!(validate_search_query("  wheat ").unwrap(), "wheat");
//! assert!(validate_search_query(&"x".repeat(101)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{
    CropCategoryPatch, CropPatch, NewCrop, NewCropCategory, NewSeason, NewSoilType, NewUser,
    NewWeatherRecord, PredictionInput, PredictionRequest, SeasonPatch, SoilTypePatch, UserPatch,
    WeatherRecordPatch,
};
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Validates a display name: required, at most [`MAX_NAME_LEN`] characters.
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    validate_required(field, value)?;
    if value.trim().chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@`, with something on both sides
/// - The domain part contains a dot that is neither first nor last
///
/// ## Example
/// ```rust
/// use agri_core::validation::validate_email;
///
/// assert!(validate_email("ramesh@example.com").is_ok());
/// assert!(validate_email("ramesh@example").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    validate_required("email", email)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing @"))?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must contain a single @ after the name"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }
    match domain.find('.') {
        Some(dot) if dot > 0 && !domain.ends_with('.') => Ok(()),
        _ => Err(invalid("domain must contain a dot")),
    }
}

/// Validates a value that must lie within `min..=max`.
pub fn validate_range(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

/// Validates an English month name ("June", case-insensitive).
pub fn validate_month(field: &str, value: &str) -> ValidationResult<()> {
    validate_required(field, value)?;
    let value = value.trim();
    if !MONTHS.iter().any(|month| month.eq_ignore_ascii_case(value)) {
        return Err(ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: MONTHS.iter().map(|m| m.to_string()).collect(),
        });
    }
    Ok(())
}

/// Normalizes a search query.
///
/// Any query is accepted; an empty one returns every record and one that
/// matches nothing returns an empty list.
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    Ok(query.trim().to_string())
}

fn validate_optional<T>(
    value: &Option<T>,
    check: impl FnOnce(&T) -> ValidationResult<()>,
) -> ValidationResult<()> {
    match value {
        Some(value) => check(value),
        None => Ok(()),
    }
}

// =============================================================================
// Farmer Input Form
// =============================================================================

/// Validates the crop input form and converts it to a request.
///
/// Fields are checked in form order (crop, field size, soil type,
/// location), so the first missing field is the one reported.
pub fn validate_prediction_input(input: &PredictionInput) -> ValidationResult<PredictionRequest> {
    validate_required("cropId", &input.crop_id)?;
    validate_required("fieldSize", &input.field_size)?;
    validate_required("soilTypeId", &input.soil_type_id)?;
    validate_required("location", &input.location)?;

    Ok(PredictionRequest {
        crop_id: input.crop_id.trim().to_string(),
        field_size: input.field_size.parse()?,
        soil_type_id: input.soil_type_id.trim().to_string(),
        location: input.location.trim().to_string(),
    })
}

// =============================================================================
// Admin Dialogs
// =============================================================================

pub fn validate_new_crop(draft: &NewCrop) -> ValidationResult<()> {
    validate_name("name", &draft.name)?;
    validate_required("category", &draft.category)
}

pub fn validate_crop_patch(patch: &CropPatch) -> ValidationResult<()> {
    validate_optional(&patch.name, |name| validate_name("name", name))?;
    validate_optional(&patch.category, |c| validate_required("category", c))
}

pub fn validate_new_soil_type(draft: &NewSoilType) -> ValidationResult<()> {
    validate_name("name", &draft.name)
}

pub fn validate_soil_type_patch(patch: &SoilTypePatch) -> ValidationResult<()> {
    validate_optional(&patch.name, |name| validate_name("name", name))
}

fn validate_humidity(humidity: f64) -> ValidationResult<()> {
    validate_range("humidity", humidity, 0.0, 100.0)
}

fn validate_rainfall(rainfall: f64) -> ValidationResult<()> {
    if !rainfall.is_finite() || rainfall < 0.0 {
        return Err(ValidationError::InvalidFormat {
            field: "rainfall".to_string(),
            reason: "must be zero or more".to_string(),
        });
    }
    Ok(())
}

fn validate_temperature(temperature: f64) -> ValidationResult<()> {
    if !temperature.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "temperature".to_string(),
            reason: "must be a number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_new_weather_record(draft: &NewWeatherRecord) -> ValidationResult<()> {
    validate_required("location", &draft.location)?;
    validate_required("condition", &draft.condition)?;
    validate_temperature(draft.temperature)?;
    validate_humidity(draft.humidity)?;
    validate_rainfall(draft.rainfall)
}

pub fn validate_weather_record_patch(patch: &WeatherRecordPatch) -> ValidationResult<()> {
    validate_optional(&patch.location, |l| validate_required("location", l))?;
    validate_optional(&patch.condition, |c| validate_required("condition", c))?;
    validate_optional(&patch.temperature, |t| validate_temperature(*t))?;
    validate_optional(&patch.humidity, |h| validate_humidity(*h))?;
    validate_optional(&patch.rainfall, |r| validate_rainfall(*r))
}

pub fn validate_new_user(draft: &NewUser) -> ValidationResult<()> {
    validate_name("name", &draft.name)?;
    validate_email(&draft.email)?;
    validate_required("phone", &draft.phone)
}

pub fn validate_user_patch(patch: &UserPatch) -> ValidationResult<()> {
    validate_optional(&patch.name, |name| validate_name("name", name))?;
    validate_optional(&patch.email, |email| validate_email(email))?;
    validate_optional(&patch.phone, |phone| validate_required("phone", phone))
}

pub fn validate_new_crop_category(draft: &NewCropCategory) -> ValidationResult<()> {
    validate_name("name", &draft.name)?;
    validate_required("description", &draft.description)
}

pub fn validate_crop_category_patch(patch: &CropCategoryPatch) -> ValidationResult<()> {
    validate_optional(&patch.name, |name| validate_name("name", name))?;
    validate_optional(&patch.description, |d| validate_required("description", d))
}

pub fn validate_new_season(draft: &NewSeason) -> ValidationResult<()> {
    validate_name("name", &draft.name)?;
    validate_month("startMonth", &draft.start_month)?;
    validate_month("endMonth", &draft.end_month)?;
    validate_required("description", &draft.description)
}

pub fn validate_season_patch(patch: &SeasonPatch) -> ValidationResult<()> {
    validate_optional(&patch.name, |name| validate_name("name", name))?;
    validate_optional(&patch.start_month, |m| validate_month("startMonth", m))?;
    validate_optional(&patch.end_month, |m| validate_month("endMonth", m))?;
    validate_optional(&patch.description, |d| validate_required("description", d))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldSize, UserRole, UserStatus};
    use chrono::Utc;

    fn weather(humidity: f64, rainfall: f64) -> NewWeatherRecord {
        NewWeatherRecord {
            location: "Nagpur".to_string(),
            temperature: 35.0,
            humidity,
            rainfall,
            condition: "Sunny".to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_prediction_input_all_fields_required() {
        let full = PredictionInput {
            crop_id: "1".to_string(),
            field_size: "10-20 acres".to_string(),
            soil_type_id: "2".to_string(),
            location: " Nashik ".to_string(),
        };
        let request = validate_prediction_input(&full).unwrap();
        assert_eq!(request.field_size, FieldSize::TenToTwenty);
        assert_eq!(request.location, "Nashik");

        let missing_location = PredictionInput {
            location: "  ".to_string(),
            ..full.clone()
        };
        assert_eq!(
            validate_prediction_input(&missing_location),
            Err(ValidationError::required("location"))
        );

        let missing_crop = PredictionInput {
            crop_id: String::new(),
            ..full.clone()
        };
        assert_eq!(
            validate_prediction_input(&missing_crop),
            Err(ValidationError::required("cropId"))
        );
    }

    #[test]
    fn test_prediction_input_unknown_band() {
        let input = PredictionInput {
            crop_id: "1".to_string(),
            field_size: "50 acres".to_string(),
            soil_type_id: "2".to_string(),
            location: "Pune".to_string(),
        };
        assert!(matches!(
            validate_prediction_input(&input),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_crop_requires_name_and_category() {
        let draft = NewCrop {
            name: "Barley".to_string(),
            icon: String::new(),
            category: String::new(),
        };
        assert_eq!(
            validate_new_crop(&draft),
            Err(ValidationError::required("category"))
        );

        let long = CropPatch {
            name: Some("x".repeat(MAX_NAME_LEN + 1)),
            ..Default::default()
        };
        assert!(matches!(
            validate_crop_patch(&long),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(validate_crop_patch(&CropPatch::default()).is_ok());
    }

    #[test]
    fn test_weather_ranges() {
        assert!(validate_new_weather_record(&weather(65.0, 120.0)).is_ok());
        assert!(validate_new_weather_record(&weather(0.0, 0.0)).is_ok());
        assert!(validate_new_weather_record(&weather(100.0, 0.0)).is_ok());

        let err = validate_new_weather_record(&weather(101.0, 0.0)).unwrap_err();
        assert_eq!(err.to_string(), "humidity must be between 0 and 100");

        assert!(validate_new_weather_record(&weather(50.0, -1.0)).is_err());
        assert!(validate_new_weather_record(&weather(f64::NAN, 0.0)).is_err());

        let patch = WeatherRecordPatch {
            humidity: Some(-5.0),
            ..Default::default()
        };
        assert!(validate_weather_record_patch(&patch).is_err());
    }

    #[test]
    fn test_weather_temperature_and_location_unbounded() {
        let hot = NewWeatherRecord {
            temperature: 101.0,
            location: "L".repeat(150),
            ..weather(50.0, 0.0)
        };
        assert!(validate_new_weather_record(&hot).is_ok());

        let frozen = NewWeatherRecord {
            temperature: -120.0,
            ..weather(50.0, 0.0)
        };
        assert!(validate_new_weather_record(&frozen).is_ok());

        let patch = WeatherRecordPatch {
            temperature: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(validate_weather_record_patch(&patch).is_err());

        let patch = WeatherRecordPatch {
            location: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_weather_record_patch(&patch),
            Err(ValidationError::required("location"))
        );
    }

    #[test]
    fn test_search_query_has_no_length_limit() {
        let long = "w".repeat(500);
        assert_eq!(validate_search_query(&long), Ok(long.clone()));
        assert_eq!(validate_search_query("  rice "), Ok("rice".to_string()));
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("priya@example.com").is_ok());
        assert!(validate_email("priya.s@farm.co.in").is_ok());

        for bad in ["priya", "@example.com", "priya@", "priya@.com", "a@b@c.com", "p riya@x.com"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_user_requires_phone() {
        let draft = NewUser {
            name: "Suresh".to_string(),
            email: "suresh@example.com".to_string(),
            phone: " ".to_string(),
            role: UserRole::Farmer,
            status: UserStatus::Active,
        };
        assert_eq!(
            validate_new_user(&draft),
            Err(ValidationError::required("phone"))
        );
    }

    #[test]
    fn test_season_months() {
        let draft = NewSeason {
            name: "Kharif".to_string(),
            start_month: "june".to_string(),
            end_month: "October".to_string(),
            description: "Monsoon season crops".to_string(),
            icon: "🌧️".to_string(),
        };
        assert!(validate_new_season(&draft).is_ok());

        let bad = NewSeason {
            end_month: "Monsoon".to_string(),
            ..draft
        };
        assert!(matches!(
            validate_new_season(&bad),
            Err(ValidationError::NotAllowed { ref field, .. }) if field == "endMonth"
        ));
    }

    #[test]
    fn test_category_requires_description() {
        let draft = NewCropCategory {
            name: "Oilseeds".to_string(),
            description: String::new(),
            icon: "🌻".to_string(),
        };
        assert_eq!(
            validate_new_crop_category(&draft),
            Err(ValidationError::required("description"))
        );
    }

    #[test]
    fn test_search_query() {
        assert_eq!(validate_search_query("").unwrap(), "");
        assert_eq!(validate_search_query(&"a".repeat(100)).unwrap().len(), 100);
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }
}
