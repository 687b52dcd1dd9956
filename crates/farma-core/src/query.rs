//! # Catalog Query Engine
//!
//! Pure filter/sort transforms over the pharmacy and product collections.
//!
//! ## Query Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Query Engine                               │
//! │                                                                         │
//! │  UI state (search box, selects) ──► explicit query value               │
//! │                                                                         │
//! │  ProductQuery ──► filter_products ──► ordered Vec<Product>             │
//! │    1. search: case-insensitive substring on product name                │
//! │    2. type filter: OTC / RX / all                                       │
//! │    3. price mode: promo-only keeps, low-high/high-low stable-sort       │
//! │                                                                         │
//! │  PharmacyQuery ──► filter_pharmacies ──► ordered Vec<Pharmacy>         │
//! │    1. search: pharmacy name OR any carried product name                 │
//! │    2. price mode ≠ all: require ≥1 product (≥1 promo for promo-only)   │
//! │    3. low-high sorts by min product price, high-low by max              │
//! │                                                                         │
//! │  Filtering ALWAYS precedes sorting. Sorting is stable.                  │
//! │  No side effects, no mutation of inputs, no failure modes:              │
//! │  empty inputs resolve to empty outputs.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each keystroke or selection change in the UI re-runs the full transform
//! over the complete in-memory record set. The collections are small; no
//! memoization is needed for correctness.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use ts_rs::TS;

use crate::types::{Pharmacy, Product, ProductKind};

// =============================================================================
// Query Specification
// =============================================================================

/// Price handling for a query: keep-all, a sort direction, or promo-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PriceMode {
    /// No price-based filtering or reordering.
    #[default]
    All,
    /// Stable-sort ascending by current price.
    LowHigh,
    /// Stable-sort descending by current price.
    HighLow,
    /// Keep only records with an active promotion.
    PromoOnly,
}

/// Product-type restriction for product-level queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TypeFilter {
    /// Keep all product kinds.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Keep over-the-counter products only.
    #[serde(rename = "OTC")]
    Otc,
    /// Keep prescription products only.
    #[serde(rename = "RX")]
    Rx,
}

impl TypeFilter {
    /// Whether a product of the given kind passes this filter.
    pub fn matches(&self, kind: ProductKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Otc => kind == ProductKind::Otc,
            TypeFilter::Rx => kind == ProductKind::Rx,
        }
    }
}

/// Query specification for a single pharmacy's catalog.
///
/// Modeled as an explicit, serializable value (rather than ambient UI state)
/// so the engine stays trivially testable in isolation from any rendering
/// technology. The default value is the identity query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    /// Free-text search; empty keeps all.
    pub search: String,
    /// Price filtering/ordering mode.
    pub price_mode: PriceMode,
    /// Product-type restriction.
    pub type_filter: TypeFilter,
}

/// Query specification for the full pharmacy directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PharmacyQuery {
    /// Free-text search; matches the pharmacy name OR the name of any
    /// product it carries. Empty keeps all.
    pub search: String,
    /// Price filtering/ordering mode.
    pub price_mode: PriceMode,
}

// =============================================================================
// Product-Level Filtering
// =============================================================================

/// Filters and orders one pharmacy's products according to a query.
///
/// Steps apply in this exact order; filtering always precedes sorting:
/// 1. free-text search (case-insensitive substring on the name),
/// 2. type filter,
/// 3. price mode (promo-only filter, or a stable price sort).
///
/// Never fails: an empty input, an empty query, or products without a prior
/// price all resolve to ordinary (possibly empty) results.
pub fn filter_products(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let needle = query.search.trim().to_lowercase();

    let mut results: Vec<Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| query.type_filter.matches(p.kind))
        .cloned()
        .collect();

    match query.price_mode {
        PriceMode::All => {}
        PriceMode::PromoOnly => results.retain(Product::is_on_promotion),
        // Vec::sort_by_key is stable: equal prices keep their prior order.
        PriceMode::LowHigh => results.sort_by_key(|p| p.new_price_bani),
        PriceMode::HighLow => results.sort_by_key(|p| Reverse(p.new_price_bani)),
    }

    results
}

// =============================================================================
// Pharmacy-Level Filtering
// =============================================================================

/// Filters and orders the pharmacy directory according to a query.
///
/// The search matches a pharmacy when its own name contains the query OR the
/// name of any product it carries does. Any price mode other than `All`
/// requires the pharmacy to carry at least one product (at least one active
/// promotion for `PromoOnly`), which is also what guarantees the sort keys
/// below are always defined: a pharmacy with zero products never reaches the
/// sort.
pub fn filter_pharmacies(
    pharmacies: &[Pharmacy],
    products: &[Product],
    query: &PharmacyQuery,
) -> Vec<Pharmacy> {
    let needle = query.search.trim().to_lowercase();

    let mut results: Vec<Pharmacy> = pharmacies
        .iter()
        .filter(|ph| {
            needle.is_empty()
                || ph.name.to_lowercase().contains(&needle)
                || carried_by(products, &ph.id)
                    .any(|p| p.name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    match query.price_mode {
        PriceMode::All => {}
        PriceMode::PromoOnly => {
            results.retain(|ph| carried_by(products, &ph.id).any(Product::is_on_promotion));
        }
        PriceMode::LowHigh => {
            results.retain(|ph| min_price_bani(products, &ph.id).is_some());
            results.sort_by_key(|ph| min_price_bani(products, &ph.id).unwrap_or(i64::MAX));
        }
        PriceMode::HighLow => {
            results.retain(|ph| max_price_bani(products, &ph.id).is_some());
            results.sort_by_key(|ph| {
                Reverse(max_price_bani(products, &ph.id).unwrap_or(i64::MIN))
            });
        }
    }

    results
}

/// Iterates the products carried by one pharmacy.
fn carried_by<'a>(
    products: &'a [Product],
    pharmacy_id: &'a str,
) -> impl Iterator<Item = &'a Product> {
    products.iter().filter(move |p| p.pharmacy_id == pharmacy_id)
}

/// Minimum current price among a pharmacy's products; None with zero products.
fn min_price_bani(products: &[Product], pharmacy_id: &str) -> Option<i64> {
    carried_by(products, pharmacy_id)
        .map(|p| p.new_price_bani)
        .min()
}

/// Maximum current price among a pharmacy's products; None with zero products.
fn max_price_bani(products: &[Product], pharmacy_id: &str) -> Option<i64> {
    carried_by(products, pharmacy_id)
        .map(|p| p.new_price_bani)
        .max()
}

// =============================================================================
// Derived Statistics
// =============================================================================

/// Headline counters for the directory landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub pharmacies: usize,
    pub products: usize,
    pub promotions: usize,
}

/// Per-pharmacy counters for the detail page stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyStats {
    pub products: usize,
    pub otc: usize,
    pub rx: usize,
    pub promotions: usize,
}

/// Counts pharmacies, products, and active promotions across the directory.
pub fn directory_stats(pharmacies: &[Pharmacy], products: &[Product]) -> DirectoryStats {
    DirectoryStats {
        pharmacies: pharmacies.len(),
        products: products.len(),
        promotions: products.iter().filter(|p| p.is_on_promotion()).count(),
    }
}

/// Counts one pharmacy's products by kind and active promotions.
pub fn pharmacy_stats(products: &[Product], pharmacy_id: &str) -> PharmacyStats {
    let mut stats = PharmacyStats {
        products: 0,
        otc: 0,
        rx: 0,
        promotions: 0,
    };

    for p in carried_by(products, pharmacy_id) {
        stats.products += 1;
        match p.kind {
            ProductKind::Otc => stats.otc += 1,
            ProductKind::Rx => stats.rx += 1,
        }
        if p.is_on_promotion() {
            stats.promotions += 1;
        }
    }

    stats
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pharmacy(id: &str, name: &str) -> Pharmacy {
        Pharmacy {
            id: id.to_string(),
            name: name.to_string(),
            logo_url: format!("https://img.example.com/{id}.png"),
            address: "Str. Exemplu 1, București".to_string(),
            phone: "+40 21 000 0000".to_string(),
            email: format!("contact@{id}.example.com"),
            schedule: "Luni-Vineri: 08:00-20:00".to_string(),
            latitude: 44.43,
            longitude: 26.10,
            distance_km: None,
        }
    }

    fn product(id: &str, pharmacy_id: &str, name: &str, old: Option<i64>, new: i64) -> Product {
        Product {
            id: id.to_string(),
            pharmacy_id: pharmacy_id.to_string(),
            name: name.to_string(),
            kind: ProductKind::Otc,
            old_price_bani: old,
            new_price_bani: new,
            stock: 10,
            prospect_url: "https://example.com/prospect.pdf".to_string(),
            images: vec![],
        }
    }

    fn rx(mut p: Product) -> Product {
        p.kind = ProductKind::Rx;
        p
    }

    fn sample_products() -> Vec<Product> {
        vec![
            product("p1", "a", "Paracetamol 500mg", Some(10000), 7500),
            rx(product("p2", "a", "Augmentin 875mg", None, 4550)),
            product("p3", "a", "Vitamina C 1000mg", Some(2000), 2000),
            rx(product("p4", "b", "Paracetamol Sinus", None, 3200)),
            product("p5", "b", "Ibuprofen 400mg", Some(1800), 1200),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = sample_products();

        let query = ProductQuery {
            search: "PaRaCet".to_string(),
            ..Default::default()
        };
        let results = filter_products(&products, &query);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.name.starts_with("Paracetamol")));

        let query = ProductQuery {
            search: "aspirina".to_string(),
            ..Default::default()
        };
        assert!(filter_products(&products, &query).is_empty());
    }

    #[test]
    fn test_empty_search_is_identity_step() {
        let products = sample_products();
        let results = filter_products(&products, &ProductQuery::default());

        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn test_type_filter_partitions_preserving_order() {
        let products = sample_products();

        let otc = filter_products(
            &products,
            &ProductQuery {
                type_filter: TypeFilter::Otc,
                ..Default::default()
            },
        );
        let rx = filter_products(
            &products,
            &ProductQuery {
                type_filter: TypeFilter::Rx,
                ..Default::default()
            },
        );

        // Partition property: OTC ++ RX is a reordering-free split of the input
        let otc_ids: Vec<&str> = otc.iter().map(|p| p.id.as_str()).collect();
        let rx_ids: Vec<&str> = rx.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(otc_ids, ["p1", "p3", "p5"]);
        assert_eq!(rx_ids, ["p2", "p4"]);
        assert_eq!(otc.len() + rx.len(), products.len());
    }

    #[test]
    fn test_low_high_prices_non_decreasing() {
        let products = sample_products();
        let results = filter_products(
            &products,
            &ProductQuery {
                price_mode: PriceMode::LowHigh,
                ..Default::default()
            },
        );

        assert!(results
            .windows(2)
            .all(|w| w[0].new_price_bani <= w[1].new_price_bani));
    }

    #[test]
    fn test_high_low_prices_non_increasing() {
        let products = sample_products();
        let results = filter_products(
            &products,
            &ProductQuery {
                price_mode: PriceMode::HighLow,
                ..Default::default()
            },
        );

        assert!(results
            .windows(2)
            .all(|w| w[0].new_price_bani >= w[1].new_price_bani));
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = vec![
            product("p1", "a", "Alfa", None, 1000),
            product("p2", "a", "Beta", None, 1000),
            product("p3", "a", "Gama", None, 500),
        ];
        let results = filter_products(
            &products,
            &ProductQuery {
                price_mode: PriceMode::LowHigh,
                ..Default::default()
            },
        );

        // Equal keys (p1, p2) preserve their prior relative order
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p3", "p1", "p2"]);
    }

    #[test]
    fn test_promo_only_requires_strictly_greater_old_price() {
        let products = sample_products();
        let results = filter_products(
            &products,
            &ProductQuery {
                price_mode: PriceMode::PromoOnly,
                ..Default::default()
            },
        );

        // p3 has old == new and must not qualify; p2/p4 have no old price
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p5"]);
        assert!(results
            .iter()
            .all(|p| p.old_price_bani.is_some_and(|old| old > p.new_price_bani)));
    }

    #[test]
    fn test_filters_apply_before_sorting() {
        let products = sample_products();
        let results = filter_products(
            &products,
            &ProductQuery {
                search: "paracetamol".to_string(),
                type_filter: TypeFilter::Otc,
                price_mode: PriceMode::LowHigh,
            },
        );

        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1"]);
    }

    #[test]
    fn test_empty_inputs_resolve_to_empty_results() {
        let results = filter_products(
            &[],
            &ProductQuery {
                price_mode: PriceMode::LowHigh,
                ..Default::default()
            },
        );
        assert!(results.is_empty());

        let results = filter_pharmacies(&[], &[], &PharmacyQuery::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_directory_search_matches_pharmacy_or_carried_product() {
        let pharmacies = vec![pharmacy("a", "Farmacia Centrală"), pharmacy("b", "HelpNet Obor")];
        let products = sample_products();

        // Matches pharmacy "b" only through its product name
        let query = PharmacyQuery {
            search: "ibuprofen".to_string(),
            ..Default::default()
        };
        let results = filter_pharmacies(&pharmacies, &products, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "b");

        // Matches pharmacy "a" through its own name
        let query = PharmacyQuery {
            search: "centrală".to_string(),
            ..Default::default()
        };
        let results = filter_pharmacies(&pharmacies, &products, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");
    }

    #[test]
    fn test_directory_low_high_sorts_by_min_product_price() {
        // Pharmacy A carries [30.00, 10.00], B carries [20.00]:
        // A's min is 10.00, B's min is 20.00, expected order [A, B]
        let pharmacies = vec![pharmacy("b", "Farmacia B"), pharmacy("a", "Farmacia A")];
        let products = vec![
            product("p1", "a", "Produs 30", None, 3000),
            product("p2", "a", "Produs 10", None, 1000),
            product("p3", "b", "Produs 20", None, 2000),
        ];

        let results = filter_pharmacies(
            &pharmacies,
            &products,
            &PharmacyQuery {
                price_mode: PriceMode::LowHigh,
                ..Default::default()
            },
        );
        let ids: Vec<&str> = results.iter().map(|ph| ph.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_directory_high_low_sorts_by_max_product_price() {
        let pharmacies = vec![pharmacy("a", "Farmacia A"), pharmacy("b", "Farmacia B")];
        let products = vec![
            product("p1", "a", "Produs 30", None, 3000),
            product("p2", "a", "Produs 10", None, 1000),
            product("p3", "b", "Produs 45", None, 4500),
        ];

        let results = filter_pharmacies(
            &pharmacies,
            &products,
            &PharmacyQuery {
                price_mode: PriceMode::HighLow,
                ..Default::default()
            },
        );
        let ids: Vec<&str> = results.iter().map(|ph| ph.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_directory_excludes_zero_product_pharmacies_in_price_modes() {
        let pharmacies = vec![pharmacy("a", "Farmacia A"), pharmacy("empty", "Farmacia Goală")];
        let products = vec![product("p1", "a", "Produs", None, 1000)];

        for mode in [PriceMode::LowHigh, PriceMode::HighLow, PriceMode::PromoOnly] {
            let results = filter_pharmacies(
                &pharmacies,
                &products,
                &PharmacyQuery {
                    price_mode: mode,
                    ..Default::default()
                },
            );
            assert!(
                results.iter().all(|ph| ph.id != "empty"),
                "zero-product pharmacy leaked through {mode:?}"
            );
        }

        // ...but stays listed when no price mode is active
        let results = filter_pharmacies(&pharmacies, &products, &PharmacyQuery::default());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_directory_promo_only_requires_an_active_promotion() {
        let pharmacies = vec![pharmacy("a", "Farmacia A"), pharmacy("b", "Farmacia B")];
        let products = vec![
            product("p1", "a", "Cu promoție", Some(2000), 1500),
            product("p2", "b", "Fără promoție", Some(1000), 1000),
        ];

        let results = filter_pharmacies(
            &pharmacies,
            &products,
            &PharmacyQuery {
                price_mode: PriceMode::PromoOnly,
                ..Default::default()
            },
        );
        let ids: Vec<&str> = results.iter().map(|ph| ph.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn test_engine_does_not_mutate_inputs() {
        let products = sample_products();
        let before: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();

        let _ = filter_products(
            &products,
            &ProductQuery {
                price_mode: PriceMode::HighLow,
                ..Default::default()
            },
        );

        let after: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_stats() {
        let pharmacies = vec![pharmacy("a", "Farmacia A"), pharmacy("b", "Farmacia B")];
        let products = sample_products();

        let stats = directory_stats(&pharmacies, &products);
        assert_eq!(stats.pharmacies, 2);
        assert_eq!(stats.products, 5);
        // Strict rule: old == new (p3) is not a promotion
        assert_eq!(stats.promotions, 2);

        let stats = pharmacy_stats(&products, "a");
        assert_eq!(stats.products, 3);
        assert_eq!(stats.otc, 2);
        assert_eq!(stats.rx, 1);
        assert_eq!(stats.promotions, 1);
    }

    #[test]
    fn test_query_wire_format() {
        let json = r#"{"search":"paracet","priceMode":"promo-only","typeFilter":"RX"}"#;
        let query: ProductQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.search, "paracet");
        assert_eq!(query.price_mode, PriceMode::PromoOnly);
        assert_eq!(query.type_filter, TypeFilter::Rx);

        // Missing fields fall back to the identity query
        let query: PharmacyQuery = serde_json::from_str(r#"{"priceMode":"low-high"}"#).unwrap();
        assert_eq!(query.price_mode, PriceMode::LowHigh);
        assert!(query.search.is_empty());
    }
}
