//! # Validation Module
//!
//! Input validation for the admin surface.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                         │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Directory command (Rust)                                      │
//! │  └── THIS MODULE: field rules before any acknowledgement               │
//! │                                                                         │
//! │  The admin panel acknowledges intents without persisting them, but a   │
//! │  real storage layer slotted in later reuses these checks unchanged.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farma_core::validation::{validate_product_name, validate_price_bani};
//!
//! validate_product_name("Paracetamol 500mg").unwrap();
//! validate_price_bani(2599).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_PRODUCT_IMAGES, MAX_SEARCH_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a free-text search query.
///
/// ## Rules
/// - Can be empty (an empty query keeps all records)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a prospect (leaflet) URL.
///
/// ## Rules
/// - Must not be empty
/// - Must be an http(s) URL
pub fn validate_prospect_url(url: &str) -> ValidationResult<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::Required {
            field: "prospect_url".to_string(),
        });
    }

    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(ValidationError::InvalidFormat {
            field: "prospect_url".to_string(),
            reason: "must be an http(s) URL".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in bani.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (sample items)
///
/// ## Example
/// ```rust
/// use farma_core::validation::validate_price_bani;
///
/// assert!(validate_price_bani(2599).is_ok());  // 25.99 RON
/// assert!(validate_price_bani(0).is_ok());
/// assert!(validate_price_bani(-100).is_err());
/// ```
pub fn validate_price_bani(bani: i64) -> ValidationResult<()> {
    if bani < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock count.
///
/// ## Rules
/// - Must be non-negative; zero means "out of stock", not an error
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a product image list.
///
/// ## Rules
/// - At most [`MAX_PRODUCT_IMAGES`] entries
/// - No blank URLs (the admin form pads with empty slots; callers drop those
///   before validating)
pub fn validate_images(images: &[String]) -> ValidationResult<()> {
    if images.len() > MAX_PRODUCT_IMAGES {
        return Err(ValidationError::TooMany {
            field: "images".to_string(),
            max: MAX_PRODUCT_IMAGES,
        });
    }

    if images.iter().any(|url| url.trim().is_empty()) {
        return Err(ValidationError::InvalidFormat {
            field: "images".to_string(),
            reason: "image URLs must not be blank".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Paracetamol 500mg").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  paracet  ").unwrap(), "paracet");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"x".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_prospect_url() {
        assert!(validate_prospect_url("https://example.com/prospect.pdf").is_ok());
        assert!(validate_prospect_url("http://example.com/p.pdf").is_ok());
        assert!(validate_prospect_url("").is_err());
        assert!(validate_prospect_url("ftp://example.com/p.pdf").is_err());
    }

    #[test]
    fn test_validate_price_and_stock() {
        assert!(validate_price_bani(0).is_ok());
        assert!(validate_price_bani(2599).is_ok());
        assert!(validate_price_bani(-1).is_err());

        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(100).is_ok());
        assert!(validate_stock(-5).is_err());
    }

    #[test]
    fn test_validate_images() {
        assert!(validate_images(&[]).is_ok());
        assert!(validate_images(&["https://img/1.png".to_string()]).is_ok());

        let five = vec!["https://img/x.png".to_string(); 5];
        assert!(validate_images(&five).is_err());

        let blank = vec!["https://img/1.png".to_string(), " ".to_string()];
        assert!(validate_images(&blank).is_err());
    }
}
