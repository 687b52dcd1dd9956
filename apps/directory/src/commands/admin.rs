//! # Admin Commands
//!
//! The administrative panel's add/edit/delete/refresh intents.
//!
//! ## Acknowledgement-Only Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Admin Intent Flow                                  │
//! │                                                                         │
//! │  Dialog "Salvează" ──► save_product ──► validate ──► AdminAck (toast)   │
//! │  Row "Șterge"      ──► delete_product ─► validate ──► AdminAck (toast)  │
//! │  "Actualizează Stoc" ► refresh_stock ──► count ─────► StockRefreshAck   │
//! │                                                                         │
//! │  NOTHING MUTATES THE CATALOG. There is no persistence layer behind      │
//! │  these commands; they validate the intent and confirm it, exactly as    │
//! │  far as the system goes. A real storage layer slots in behind the same  │
//! │  validated inputs.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use farma_core::validation::{
    validate_images, validate_price_bani, validate_product_name, validate_prospect_url,
    validate_stock,
};
use farma_core::{CoreError, ProductKind};

use crate::error::ApiError;
use crate::state::CatalogState;

// =============================================================================
// Draft Input
// =============================================================================

/// The admin dialog's product form, as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub kind: ProductKind,
    /// Optional prior price; equal-or-lower values are allowed and simply
    /// mean "no promotion".
    pub old_price_bani: Option<i64>,
    pub new_price_bani: i64,
    pub stock: i64,
    pub prospect_url: String,
    /// The form renders four slots and pads unused ones with empty strings;
    /// blanks are dropped before validation.
    pub images: Vec<String>,
}

impl ProductDraft {
    /// The gallery entries that were actually filled in.
    fn filled_images(&self) -> Vec<String> {
        self.images
            .iter()
            .filter(|url| !url.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Runs every field rule; returns the cleaned image list.
    fn validate(&self) -> Result<Vec<String>, ApiError> {
        validate_product_name(&self.name)?;
        validate_price_bani(self.new_price_bani)?;
        if let Some(old) = self.old_price_bani {
            validate_price_bani(old)?;
        }
        validate_stock(self.stock)?;
        validate_prospect_url(&self.prospect_url)?;

        let images = self.filled_images();
        validate_images(&images)?;
        Ok(images)
    }
}

// =============================================================================
// Acknowledgements
// =============================================================================

/// Confirmation toast payload for save/delete intents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAck {
    /// Toast title (e.g. "Produs adăugat").
    pub title: String,
    /// Toast body.
    pub detail: String,
    /// The product the intent addressed; minted for creates.
    pub product_id: String,
    pub acknowledged_at: DateTime<Utc>,
}

/// Confirmation payload for the manual stock refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRefreshAck {
    pub title: String,
    pub detail: String,
    pub pharmacy_id: String,
    /// How many products the refresh covered.
    pub products: usize,
    pub refreshed_at: DateTime<Utc>,
}

// =============================================================================
// Commands
// =============================================================================

/// Acknowledges an add (no `product_id`) or edit (`product_id` set) intent.
///
/// Validates every field and both references, then confirms. Creates mint a
/// UUID so the toast and any optimistic UI have an id to show; edits echo
/// the existing id.
pub fn save_product(
    catalog: &CatalogState,
    pharmacy_id: &str,
    product_id: Option<&str>,
    draft: &ProductDraft,
) -> Result<AdminAck, ApiError> {
    debug!(pharmacy_id = %pharmacy_id, editing = product_id.is_some(), "save_product command");

    if catalog.inner().pharmacy(pharmacy_id).is_none() {
        return Err(CoreError::PharmacyNotFound(pharmacy_id.to_string()).into());
    }

    let _images = draft.validate()?;

    let (editing, product_id) = match product_id {
        Some(id) => {
            if catalog.inner().product(id).is_none() {
                return Err(CoreError::ProductNotFound(id.to_string()).into());
            }
            (true, id.to_string())
        }
        None => (false, Uuid::new_v4().to_string()),
    };

    let (title, verb) = if editing {
        ("Produs actualizat", "actualizat")
    } else {
        ("Produs adăugat", "adăugat")
    };

    info!(product_id = %product_id, editing, "save intent acknowledged");

    Ok(AdminAck {
        title: title.to_string(),
        detail: format!("{} a fost {} cu succes.", draft.name.trim(), verb),
        product_id,
        acknowledged_at: Utc::now(),
    })
}

/// Acknowledges a delete intent for an existing product.
pub fn delete_product(catalog: &CatalogState, product_id: &str) -> Result<AdminAck, ApiError> {
    debug!(product_id = %product_id, "delete_product command");

    let product = catalog
        .inner()
        .product(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    info!(product_id = %product_id, "delete intent acknowledged");

    Ok(AdminAck {
        title: "Produs șters".to_string(),
        detail: format!("{} a fost șters cu succes.", product.name),
        product_id: product_id.to_string(),
        acknowledged_at: Utc::now(),
    })
}

/// Acknowledges the manual "refresh stock" action for one pharmacy.
pub fn refresh_stock(
    catalog: &CatalogState,
    pharmacy_id: &str,
) -> Result<StockRefreshAck, ApiError> {
    debug!(pharmacy_id = %pharmacy_id, "refresh_stock command");

    if catalog.inner().pharmacy(pharmacy_id).is_none() {
        return Err(CoreError::PharmacyNotFound(pharmacy_id.to_string()).into());
    }

    let products = catalog.inner().products_of(pharmacy_id).len();
    info!(pharmacy_id = %pharmacy_id, products, "stock refresh acknowledged");

    Ok(StockRefreshAck {
        title: "Stoc actualizat".to_string(),
        detail: "Stocul a fost actualizat cu succes.".to_string(),
        pharmacy_id: pharmacy_id.to_string(),
        products,
        refreshed_at: Utc::now(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
