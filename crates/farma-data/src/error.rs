//! # Data Provider Errors
//!
//! Failure modes of the static data provider. There is no I/O behind it,
//! so the only things that can go wrong are dataset-shape violations caught
//! at load time.

use thiserror::Error;

/// Errors raised while loading and verifying the catalog dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// A product references a pharmacy id that resolves to nothing.
    #[error("Product {product_id} references unknown pharmacy {pharmacy_id}")]
    DanglingPharmacyRef {
        product_id: String,
        pharmacy_id: String,
    },

    /// A product carries more gallery images than the model allows.
    #[error("Product {product_id} has {count} images, at most {max} allowed")]
    TooManyImages {
        product_id: String,
        count: usize,
        max: usize,
    },

    /// A product carries a negative price or stock count.
    #[error("Product {product_id} has a negative {field}")]
    NegativeValue { product_id: String, field: String },

    /// Two records share an id.
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DataError::DanglingPharmacyRef {
            product_id: "p9".to_string(),
            pharmacy_id: "404".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product p9 references unknown pharmacy 404"
        );

        let err = DataError::TooManyImages {
            product_id: "p1".to_string(),
            count: 6,
            max: 4,
        };
        assert_eq!(err.to_string(), "Product p1 has 6 images, at most 4 allowed");
    }
}
