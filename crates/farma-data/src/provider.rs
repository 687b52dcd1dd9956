//! # Catalog Provider
//!
//! The load-once handle over the pharmacy and product collections.
//!
//! ## Load Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog::load()                                   │
//! │                                                                         │
//! │  1. Build fixture collections ───────────────────────────────────────► │
//! │                                                                         │
//! │  2. Verify dataset shape ─────────────────────────────────────────────► │
//! │     • ids unique per entity kind                                         │
//! │     • every product.pharmacy_id resolves to a pharmacy                   │
//! │     • prices and stock non-negative, image lists within bounds           │
//! │                                                                         │
//! │  3. Hand out read-only views for the rest of the process ────────────► │
//! │                                                                         │
//! │  A broken dataset is a build defect, not a runtime condition: it fails  │
//! │  loudly at startup instead of surfacing as odd query results later.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use farma_core::{Pharmacy, Product, MAX_PRODUCT_IMAGES};
use tracing::info;

use crate::error::DataError;
use crate::fixtures;

/// The verified, read-only record collections.
///
/// Created once at startup; every view reads through this handle. No method
/// on it mutates anything.
#[derive(Debug, Clone)]
pub struct Catalog {
    pharmacies: Vec<Pharmacy>,
    products: Vec<Product>,
}

impl Catalog {
    /// Loads and verifies the seeded dataset.
    pub fn load() -> Result<Self, DataError> {
        Self::from_records(fixtures::pharmacies(), fixtures::products())
    }

    /// Builds a catalog from explicit collections, verifying dataset shape.
    ///
    /// This is the seam tests (and any future non-fixture provider) use.
    pub fn from_records(
        pharmacies: Vec<Pharmacy>,
        products: Vec<Product>,
    ) -> Result<Self, DataError> {
        verify(&pharmacies, &products)?;

        info!(
            pharmacies = pharmacies.len(),
            products = products.len(),
            "catalog loaded"
        );

        Ok(Catalog {
            pharmacies,
            products,
        })
    }

    /// All pharmacies, in seed order.
    pub fn pharmacies(&self) -> &[Pharmacy] {
        &self.pharmacies
    }

    /// All products, in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up one pharmacy by id.
    pub fn pharmacy(&self, id: &str) -> Option<&Pharmacy> {
        self.pharmacies.iter().find(|ph| ph.id == id)
    }

    /// Looks up one product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The products carried by one pharmacy, in seed order.
    pub fn products_of(&self, pharmacy_id: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.pharmacy_id == pharmacy_id)
            .cloned()
            .collect()
    }
}

/// Verifies the dataset invariants before the catalog is handed out.
fn verify(pharmacies: &[Pharmacy], products: &[Product]) -> Result<(), DataError> {
    let mut pharmacy_ids = HashSet::new();
    for ph in pharmacies {
        if !pharmacy_ids.insert(ph.id.as_str()) {
            return Err(DataError::DuplicateId {
                entity: "pharmacy".to_string(),
                id: ph.id.clone(),
            });
        }
    }

    let mut product_ids = HashSet::new();
    for p in products {
        if !product_ids.insert(p.id.as_str()) {
            return Err(DataError::DuplicateId {
                entity: "product".to_string(),
                id: p.id.clone(),
            });
        }

        if !pharmacy_ids.contains(p.pharmacy_id.as_str()) {
            return Err(DataError::DanglingPharmacyRef {
                product_id: p.id.clone(),
                pharmacy_id: p.pharmacy_id.clone(),
            });
        }

        if p.images.len() > MAX_PRODUCT_IMAGES {
            return Err(DataError::TooManyImages {
                product_id: p.id.clone(),
                count: p.images.len(),
                max: MAX_PRODUCT_IMAGES,
            });
        }

        if p.new_price_bani < 0 || p.old_price_bani.is_some_and(|old| old < 0) {
            return Err(DataError::NegativeValue {
                product_id: p.id.clone(),
                field: "price".to_string(),
            });
        }

        if p.stock < 0 {
            return Err(DataError::NegativeValue {
                product_id: p.id.clone(),
                field: "stock".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use farma_core::ProductKind;

    fn test_product(id: &str, pharmacy_id: &str) -> Product {
        Product {
            id: id.to_string(),
            pharmacy_id: pharmacy_id.to_string(),
            name: "Produs de test".to_string(),
            kind: ProductKind::Otc,
            old_price_bani: None,
            new_price_bani: 1000,
            stock: 5,
            prospect_url: "https://example.com/p.pdf".to_string(),
            images: vec![],
        }
    }

    #[test]
    fn test_seeded_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.pharmacies().is_empty());
        assert!(!catalog.products().is_empty());

        // Every product's pharmacy reference resolves through the handle
        for p in catalog.products() {
            assert!(catalog.pharmacy(&p.pharmacy_id).is_some());
        }
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::load().unwrap();

        let ph = catalog.pharmacy("1").unwrap();
        assert_eq!(ph.id, "1");
        assert!(catalog.pharmacy("nope").is_none());

        let carried = catalog.products_of("1");
        assert!(!carried.is_empty());
        assert!(carried.iter().all(|p| p.pharmacy_id == "1"));
        assert!(catalog.products_of("nope").is_empty());
    }

    #[test]
    fn test_rejects_dangling_pharmacy_reference() {
        let pharmacies = fixtures::pharmacies();
        let products = vec![test_product("px", "does-not-exist")];

        let err = Catalog::from_records(pharmacies, products).unwrap_err();
        assert!(matches!(err, DataError::DanglingPharmacyRef { .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let pharmacies = fixtures::pharmacies();
        let products = vec![test_product("px", "1"), test_product("px", "2")];

        let err = Catalog::from_records(pharmacies, products).unwrap_err();
        assert!(matches!(err, DataError::DuplicateId { .. }));
    }

    #[test]
    fn test_rejects_negative_values() {
        let pharmacies = fixtures::pharmacies();
        let mut bad = test_product("px", "1");
        bad.new_price_bani = -1;

        let err = Catalog::from_records(pharmacies.clone(), vec![bad]).unwrap_err();
        assert!(matches!(err, DataError::NegativeValue { .. }));

        let mut bad = test_product("px", "1");
        bad.stock = -1;
        let err = Catalog::from_records(pharmacies, vec![bad]).unwrap_err();
        assert!(matches!(err, DataError::NegativeValue { .. }));
    }

    #[test]
    fn test_rejects_oversized_image_list() {
        let pharmacies = fixtures::pharmacies();
        let mut bad = test_product("px", "1");
        bad.images = vec!["https://img/x.png".to_string(); MAX_PRODUCT_IMAGES + 1];

        let err = Catalog::from_records(pharmacies, vec![bad]).unwrap_err();
        assert!(matches!(err, DataError::TooManyImages { .. }));
    }
}
