//! # Catalog State
//!
//! Wraps the loaded `Catalog` for use in directory commands.
//!
//! ## Thread Safety
//! The catalog is read-only after load, so commands share it without any
//! locking; `Arc` makes the sharing explicit and cheap to clone into the
//! location-detection task or any host shell.

use std::sync::Arc;

use farma_data::{Catalog, DataError};

/// Wrapper around the loaded `Catalog` for state management.
///
/// ## Why a Wrapper?
/// Host shells require state types to be `Send + Sync`. This wrapper makes
/// the intent explicit and provides a clean API for accessing the catalog
/// in commands.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Loads and verifies the seeded dataset.
    pub fn load() -> Result<Self, DataError> {
        Ok(CatalogState {
            catalog: Arc::new(Catalog::load()?),
        })
    }

    /// Wraps an already-built catalog (the seam tests use).
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}
