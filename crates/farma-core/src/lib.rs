//! # farma-core: Pure Catalog Logic for FarmaLocal
//!
//! This crate is the **heart** of the FarmaLocal directory. It contains all
//! catalog logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FarmaLocal Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (web shell)                        │   │
//! │  │    Directory Page ──► Pharmacy Detail ──► Admin Panel           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ invoke                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  Directory Commands (apps/directory)            │   │
//! │  │    list_pharmacies, list_products, save_product, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ farma-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   query   │  │ validation│  │   │
//! │  │   │ Pharmacy  │  │   Money   │  │  filters  │  │   rules   │  │   │
//! │  │   │  Product  │  │  (bani)   │  │   sorts   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 farma-data (Static Data Provider)                │   │
//! │  │            Seeded pharmacy and product collections               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Pharmacy, Product, ProductKind)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`query`] - The catalog query engine (filter/sort, pure transforms)
//! - [`geo`] - Great-circle distance math for the "near you" affordance
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the admin surface
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All prices are in bani (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use farma_core::money::Money;
//!
//! // Prices live in bani (never in floats!)
//! let old_price = Money::from_bani(10000); // 100.00 RON
//! let new_price = Money::from_bani(7500);  //  75.00 RON
//!
//! // Promotion math: round(100 * (old - new) / old)
//! assert_eq!(Money::discount_percent(old_price, new_price), 25);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod geo;
pub mod money;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use farma_core::Money` instead of
// `use farma_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use query::{PharmacyQuery, PriceMode, ProductQuery, TypeFilter};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of gallery images a product may carry.
///
/// ## Business Reason
/// The product card renders at most a 2x2 image grid; anything beyond four
/// images would be silently dropped by every consumer anyway.
pub const MAX_PRODUCT_IMAGES: usize = 4;

/// Maximum accepted length for free-text search input.
///
/// ## Business Reason
/// Search is a substring match against short product and pharmacy names;
/// longer input can only ever match nothing and is rejected early.
pub const MAX_SEARCH_LEN: usize = 100;
