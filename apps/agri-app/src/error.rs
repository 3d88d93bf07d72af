//! # API Error Type
//!
//! Unified error type for commands, plus the startup error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Smart Agri Yield                       │
//! │                                                                         │
//! │  Renderer                    Rust                                       │
//! │  ────────                    ────                                       │
//! │                                                                         │
//! │  addWeather({...})                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ── ValidationError ─┐                         │  │
//! │  │         │                              │                         │  │
//! │  │         ▼                              ▼                         │  │
//! │  │  Navigation Error? ── CoreError ───► ApiError ──────────────────►│  │
//! │  │         │                              ▲                         │  │
//! │  │         ▼                              │                         │  │
//! │  │  Storage write failed? ── DbError ─────┘                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.code = "VALIDATION_ERROR"                                       │
//! │    // e.message = "humidity must be between 0 and 100"                  │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use agri_core::{CoreError, ValidationError};
use agri_db::DbError;
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "FORBIDDEN",
///   "message": "Action requires the superadmin role, signed in as farmer"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A form field failed validation
    ValidationError,

    /// The action is not available on the current page
    NavigationError,

    /// Nobody is signed in
    NotSignedIn,

    /// Signed in with the other role
    Forbidden,

    /// Unknown page slug or language code
    NotFound,

    /// Local storage operation failed
    DatabaseError,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::NotSignedIn => ErrorCode::NotSignedIn,
            CoreError::WrongRole { .. } => ErrorCode::Forbidden,
            CoreError::UnknownPage(_) => ErrorCode::NotFound,
            CoreError::AlreadySignedIn(_) | CoreError::InvalidTransition { .. } => {
                ErrorCode::NavigationError
            }
        };
        let message = match err {
            CoreError::Validation(e) => e.to_string(),
            other => other.to_string(),
        };
        ApiError::new(code, message)
    }
}

/// Converts storage errors to API errors.
///
/// Details are logged; the renderer gets a generic message.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::PoolExhausted => ApiError::new(ErrorCode::DatabaseError, "Storage is busy"),
            DbError::ConnectionFailed(e) => {
                tracing::error!(error = %e, "Storage connection failed");
                ApiError::new(ErrorCode::DatabaseError, "Storage is unavailable")
            }
            other => {
                tracing::error!(error = %other, "Storage operation failed");
                ApiError::new(ErrorCode::DatabaseError, "Could not save changes")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Failures while starting the application.
#[derive(Debug, Error)]
pub enum InitError {
    /// No platform data directory and no `AGRI_DB_PATH` override.
    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("Could not open local storage: {0}")]
    Storage(#[from] DbError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::Role;

    #[test]
    fn test_core_error_codes() {
        let err: ApiError = CoreError::WrongRole {
            required: Role::SuperAdmin,
            current: Role::Farmer,
        }
        .into();
        assert_eq!(err.code, ErrorCode::Forbidden);

        let err: ApiError = CoreError::Validation(ValidationError::required("name")).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err: ApiError = CoreError::UnknownPage("reports".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_db_error_hides_details() {
        let err: ApiError = DbError::QueryFailed("disk I/O error".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("disk"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::validation("location is required")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "VALIDATION_ERROR", "message": "location is required" })
        );
    }
}
