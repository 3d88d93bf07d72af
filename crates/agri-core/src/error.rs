//! # Error Types
//!
//! Domain-specific error types for agri-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  agri-core errors (this file)                                          │
//! │  ├── CoreError        - Navigation and general domain errors           │
//! │  └── ValidationError  - Form validation failures                       │
//! │                                                                         │
//! │  agri-db errors (separate crate)                                       │
//! │  └── DbError          - Local storage failures                         │
//! │                                                                         │
//! │  agri-app errors                                                       │
//! │  └── ApiError         - What the renderer sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Renderer               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not-found on update/delete is deliberately absent: the collection
//! contract treats a missing id as a no-op, not an error.

use thiserror::Error;

use crate::navigation::Role;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A role-gated action was attempted with nobody signed in.
    #[error("No role is signed in")]
    NotSignedIn,

    /// Login attempted while a session is already active.
    ///
    /// ## When This Occurs
    /// The renderer only offers login from the unauthenticated view, so this
    /// indicates a stale button press after a login already went through.
    #[error("Already signed in as {0}")]
    AlreadySignedIn(Role),

    /// The action belongs to the other role's flow.
    #[error("Action requires the {required} role, signed in as {current}")]
    WrongRole { required: Role, current: Role },

    /// The action is not offered on the current page.
    ///
    /// ## User Workflow
    /// ```text
    /// Page: landing
    ///      │
    ///      ▼
    /// optimize()          ← only offered on the result page
    ///      │
    ///      ▼
    /// InvalidTransition { from: "landing", action: "optimize" }
    /// ```
    #[error("Cannot {action} from the {from} page")]
    InvalidTransition { from: String, action: String },

    /// A page slug coming from the renderer does not name any page.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidTransition error.
    pub fn invalid_transition(from: impl Into<String>, action: impl Into<String>) -> Self {
        CoreError::InvalidTransition {
            from: from.into(),
            action: action.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a form draft doesn't meet requirements.
/// The store layer never produces them; screens validate before saving.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
