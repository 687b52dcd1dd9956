//! # Error Types
//!
//! Domain-specific error types for farma-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  farma-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  farma-data errors (separate crate)                                    │
//! │  └── DataError        - Broken fixture dataset                         │
//! │                                                                         │
//! │  Directory API errors (in app)                                         │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Note that the query engine itself ([`crate::query`]) never returns any of
//! these: empty inputs and absent optional prices resolve to empty results,
//! not failures. Errors only arise at the edges (lookups, admin input).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These errors represent failed lookups or domain rule violations.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Pharmacy cannot be found.
    ///
    /// ## When This Occurs
    /// - The detail view receives an id that resolves to no pharmacy
    /// - An admin intent references a pharmacy that does not exist
    ///
    /// The consumer renders a recoverable not-found state with a link back
    /// to the directory listing; nothing propagates further.
    #[error("Pharmacy not found: {0}")]
    PharmacyNotFound(String),

    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - An admin edit/delete intent references an unknown product id
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when admin-panel input doesn't meet requirements.
/// Used for early validation before any acknowledgement is produced.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., not an http(s) URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Too many entries in a bounded list.
    #[error("{field} allows at most {max} entries")]
    TooMany { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PharmacyNotFound("9".to_string());
        assert_eq!(err.to_string(), "Pharmacy not found: 9");

        let err = CoreError::ProductNotFound("p7".to_string());
        assert_eq!(err.to_string(), "Product not found: p7");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooMany {
            field: "images".to_string(),
            max: 4,
        };
        assert_eq!(err.to_string(), "images allows at most 4 entries");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
