//! # Domain Types
//!
//! Core domain types used throughout FarmaLocal.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Pharmacy     │   │     Product     │   │   ProductKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  Otc ("OTC")    │       │
//! │  │  name, address  │   │  pharmacy_id ───┼──►│  Rx  ("RX")     │       │
//! │  │  lat/lon        │   │  old/new price  │   └─────────────────┘       │
//! │  │  distance_km?   │   │  stock, images  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Both entity kinds are loaded once at startup by the data provider and
//! read for the duration of the process. The admin panel's edit intents are
//! acknowledged but never mutate these records (there is no persistence
//! layer behind them).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Kind
// =============================================================================

/// The regulatory category of a product.
///
/// Exactly two variants exist; the wire format matches the labels the
/// frontend renders on the category badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductKind {
    /// Over-the-counter: purchasable without a prescription.
    #[serde(rename = "OTC")]
    Otc,
    /// Prescription-only.
    #[serde(rename = "RX")]
    Rx,
}

// =============================================================================
// Pharmacy
// =============================================================================

/// A local pharmacy listed in the directory.
///
/// Immutable within a session: created by the static data provider and
/// never mutated by any view.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pharmacy {
    /// Unique identifier.
    pub id: String,

    /// Display name shown on cards and the detail header.
    pub name: String,

    /// Logo image URL.
    pub logo_url: String,

    /// Street address.
    pub address: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// Opening-hours text, free form (e.g. "Luni-Vineri: 08:00-20:00").
    pub schedule: String,

    /// Geographic latitude in decimal degrees.
    pub latitude: f64,

    /// Geographic longitude in decimal degrees.
    pub longitude: f64,

    /// Distance from the current reference location, in kilometres.
    /// Absent until computed; never part of the stored record.
    pub distance_km: Option<f64>,
}

// =============================================================================
// Product
// =============================================================================

/// A product carried by one pharmacy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Owning pharmacy (many-to-one). Must reference an existing Pharmacy;
    /// the data provider verifies this at load time.
    pub pharmacy_id: String,

    /// Display name (e.g. "Paracetamol 500mg").
    pub name: String,

    /// Regulatory category (OTC or RX).
    pub kind: ProductKind,

    /// Prior price in bani, when one exists. A present-but-lower-or-equal
    /// prior price indicates no promotion.
    pub old_price_bani: Option<i64>,

    /// Current price in bani. Non-negative.
    pub new_price_bani: i64,

    /// Units in stock. Non-negative.
    pub stock: i64,

    /// Link to the product leaflet ("prospect") document.
    pub prospect_url: String,

    /// Gallery image URLs, 0 to [`crate::MAX_PRODUCT_IMAGES`] entries.
    pub images: Vec<String>,
}

impl Product {
    /// Returns the prior price as a Money type, when present.
    #[inline]
    pub fn old_price(&self) -> Option<Money> {
        self.old_price_bani.map(Money::from_bani)
    }

    /// Returns the current price as a Money type.
    #[inline]
    pub fn new_price(&self) -> Money {
        Money::from_bani(self.new_price_bani)
    }

    /// Whether the product has an active promotion.
    ///
    /// A product is on promotion iff a prior price is present **and**
    /// strictly greater than the current price. `old == new` is not a
    /// promotion; neither is a prior price below the current one.
    pub fn is_on_promotion(&self) -> bool {
        match self.old_price_bani {
            Some(old) => old > self.new_price_bani,
            None => false,
        }
    }

    /// Discount percentage for the promotion badge.
    ///
    /// `round(100 * (old - new) / old)` when on promotion, otherwise 0.
    pub fn discount_percent(&self) -> u8 {
        match self.old_price() {
            Some(old) => Money::discount_percent(old, self.new_price()),
            None => 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(old: Option<i64>, new: i64) -> Product {
        Product {
            id: "p1".to_string(),
            pharmacy_id: "1".to_string(),
            name: "Paracetamol 500mg".to_string(),
            kind: ProductKind::Otc,
            old_price_bani: old,
            new_price_bani: new,
            stock: 50,
            prospect_url: "https://example.com/prospect.pdf".to_string(),
            images: vec![],
        }
    }

    #[test]
    fn test_promotion_requires_strictly_greater_old_price() {
        assert!(product(Some(10000), 7500).is_on_promotion());
        assert!(!product(Some(7500), 7500).is_on_promotion());
        assert!(!product(Some(5000), 7500).is_on_promotion());
        assert!(!product(None, 7500).is_on_promotion());
    }

    #[test]
    fn test_discount_percent() {
        // 100.00 → 75.00 = 25%
        assert_eq!(product(Some(10000), 7500).discount_percent(), 25);
        // 99.99 → 49.99 = round(50.005) = 50%
        assert_eq!(product(Some(9999), 4999).discount_percent(), 50);
        // No promotion reports 0% / no badge
        assert_eq!(product(None, 7500).discount_percent(), 0);
        assert_eq!(product(Some(5000), 7500).discount_percent(), 0);
    }

    #[test]
    fn test_kind_wire_format() {
        assert_eq!(serde_json::to_string(&ProductKind::Otc).unwrap(), "\"OTC\"");
        assert_eq!(serde_json::to_string(&ProductKind::Rx).unwrap(), "\"RX\"");

        let kind: ProductKind = serde_json::from_str("\"RX\"").unwrap();
        assert_eq!(kind, ProductKind::Rx);
    }
}
