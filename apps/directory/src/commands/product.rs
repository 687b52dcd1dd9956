//! # Product Commands
//!
//! One pharmacy's catalog, as rendered on the detail page.
//!
//! ## Catalog Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Flow                                 │
//! │                                                                         │
//! │  User types "paracet" / picks "RX" / picks "Doar promoții"               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('list_products', { pharmacyId, search, typeFilter, priceMode }) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Query engine: search → type filter → price mode (farma-core, pure)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<ProductDto> with promotion badge data precomputed           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use farma_core::query;
use farma_core::validation::validate_search_query;
use farma_core::{CoreError, Product, ProductKind, ProductQuery};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Product DTO for the frontend cards and the admin table.
///
/// Promotion badge data (`has_promotion`, `discount_percent`) is derived
/// here once so no consumer re-implements the strict old > new rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub pharmacy_id: String,
    pub name: String,
    pub kind: ProductKind,
    pub old_price_bani: Option<i64>,
    pub new_price_bani: i64,
    pub stock: i64,
    pub prospect_url: String,
    pub images: Vec<String>,
    /// True iff a prior price exists and strictly exceeds the current one.
    pub has_promotion: bool,
    /// `round(100 * (old - new) / old)` when on promotion, otherwise 0.
    pub discount_percent: u8,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        let has_promotion = p.is_on_promotion();
        let discount_percent = p.discount_percent();
        ProductDto {
            id: p.id,
            pharmacy_id: p.pharmacy_id,
            name: p.name,
            kind: p.kind,
            old_price_bani: p.old_price_bani,
            new_price_bani: p.new_price_bani,
            stock: p.stock,
            prospect_url: p.prospect_url,
            images: p.images,
            has_promotion,
            discount_percent,
        }
    }
}

/// Lists one pharmacy's products, filtered and ordered by the query.
///
/// ## Arguments
/// * `pharmacy_id` - the catalog owner; unknown ids yield not-found
/// * `query` - search + type filter + price mode (see the engine contract)
pub fn list_products(
    catalog: &CatalogState,
    pharmacy_id: &str,
    query: &ProductQuery,
) -> Result<Vec<ProductDto>, ApiError> {
    let search = validate_search_query(&query.search)?;
    debug!(
        pharmacy_id = %pharmacy_id,
        search = %search,
        type_filter = ?query.type_filter,
        price_mode = ?query.price_mode,
        "list_products command"
    );

    if catalog.inner().pharmacy(pharmacy_id).is_none() {
        return Err(CoreError::PharmacyNotFound(pharmacy_id.to_string()).into());
    }

    let query = ProductQuery {
        search,
        price_mode: query.price_mode,
        type_filter: query.type_filter,
    };

    let carried = catalog.inner().products_of(pharmacy_id);
    let dtos: Vec<ProductDto> = query::filter_products(&carried, &query)
        .into_iter()
        .map(ProductDto::from)
        .collect();

    info!(pharmacy_id = %pharmacy_id, count = dtos.len(), "list_products complete");
    Ok(dtos)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use farma_core::{PriceMode, TypeFilter};

    fn catalog() -> CatalogState {
        CatalogState::load().unwrap()
    }

    #[test]
    fn test_lists_only_the_pharmacys_products() {
        let catalog = catalog();
        let dtos = list_products(&catalog, "2", &ProductQuery::default()).unwrap();

        assert!(!dtos.is_empty());
        assert!(dtos.iter().all(|p| p.pharmacy_id == "2"));
    }

    #[test]
    fn test_unknown_pharmacy_is_not_found() {
        let catalog = catalog();
        let err = list_products(&catalog, "999", &ProductQuery::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_type_filter_and_promo_mode() {
        let catalog = catalog();

        let rx_only = list_products(
            &catalog,
            "1",
            &ProductQuery {
                type_filter: TypeFilter::Rx,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(rx_only.iter().all(|p| p.kind == ProductKind::Rx));

        let promos = list_products(
            &catalog,
            "1",
            &ProductQuery {
                price_mode: PriceMode::PromoOnly,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(!promos.is_empty());
        assert!(promos.iter().all(|p| p.has_promotion));
        assert!(promos.iter().all(|p| p.discount_percent > 0));
    }

    #[test]
    fn test_price_sort_through_the_command() {
        let catalog = catalog();
        let dtos = list_products(
            &catalog,
            "3",
            &ProductQuery {
                price_mode: PriceMode::HighLow,
                ..Default::default()
            },
        )
        .unwrap();

        assert!(dtos
            .windows(2)
            .all(|w| w[0].new_price_bani >= w[1].new_price_bani));
    }

    #[test]
    fn test_dto_wire_format() {
        let catalog = catalog();
        let dtos = list_products(&catalog, "1", &ProductQuery::default()).unwrap();
        let json = serde_json::to_value(&dtos[0]).unwrap();

        // camelCase keys, badge data present
        assert!(json.get("pharmacyId").is_some());
        assert!(json.get("newPriceBani").is_some());
        assert!(json.get("hasPromotion").is_some());
        assert!(json.get("discountPercent").is_some());
    }
}
