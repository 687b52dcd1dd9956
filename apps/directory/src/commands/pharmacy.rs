//! # Pharmacy Commands
//!
//! Directory listing, detail header, and headline stats.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Directory Listing Flow                                │
//! │                                                                         │
//! │  User types "paracet" / picks "Preț crescător"                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('list_pharmacies', { search, priceMode })                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Query engine: OR-match on pharmacy name or carried product names,      │
//! │  then price-mode filter/sort (farma-core, pure)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Distance chip: haversine from the current reference location           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<PharmacyDto> to the frontend grid                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use farma_core::query::{self, DirectoryStats, PharmacyStats};
use farma_core::validation::validate_search_query;
use farma_core::{geo, CoreError, Pharmacy, PharmacyQuery};

use crate::error::ApiError;
use crate::state::{CatalogState, LocationState};

/// Pharmacy DTO (Data Transfer Object) for frontend.
///
/// ## Why DTO?
/// - Decouples the domain model from the API contract
/// - Carries the computed distance chip the raw record never stores
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyDto {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub schedule: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometres from the current reference location, one decimal.
    pub distance_km: Option<f64>,
}

impl From<Pharmacy> for PharmacyDto {
    fn from(ph: Pharmacy) -> Self {
        PharmacyDto {
            id: ph.id,
            name: ph.name,
            logo_url: ph.logo_url,
            address: ph.address,
            phone: ph.phone,
            email: ph.email,
            schedule: ph.schedule,
            latitude: ph.latitude,
            longitude: ph.longitude,
            distance_km: ph.distance_km,
        }
    }
}

/// Detail header for one pharmacy: record, stats bar, and the documented
/// public API path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyDetailDto {
    pub pharmacy: PharmacyDto,
    pub stats: PharmacyStats,
    /// Descriptive only - shown in the detail page's "API Public" panel,
    /// not a live endpoint.
    pub api_path: String,
}

/// The JSON-catalog path the detail page documents for integrators.
pub fn public_api_path(pharmacy_id: &str) -> String {
    format!("/api/farmacie/{pharmacy_id}/produse")
}

/// Lists the directory, filtered and ordered by the query specification.
///
/// ## Arguments
/// * `query` - free-text search plus price mode (see the engine contract)
///
/// ## Returns
/// Pharmacies in engine order, each with its distance chip computed from
/// the current reference location. Consumers must not mutate the sequence;
/// they receive their own copy.
pub fn list_pharmacies(
    catalog: &CatalogState,
    location: &LocationState,
    query: &PharmacyQuery,
) -> Result<Vec<PharmacyDto>, ApiError> {
    let search = validate_search_query(&query.search)?;
    debug!(search = %search, price_mode = ?query.price_mode, "list_pharmacies command");

    let query = PharmacyQuery {
        search,
        price_mode: query.price_mode,
    };

    let (ref_lat, ref_lon) = location.reference();
    let results = query::filter_pharmacies(
        catalog.inner().pharmacies(),
        catalog.inner().products(),
        &query,
    );

    let dtos: Vec<PharmacyDto> = results
        .into_iter()
        .map(|mut ph| {
            ph.distance_km = Some(geo::display_distance_km(
                ref_lat,
                ref_lon,
                ph.latitude,
                ph.longitude,
            ));
            PharmacyDto::from(ph)
        })
        .collect();

    info!(count = dtos.len(), "list_pharmacies complete");
    Ok(dtos)
}

/// Fetches one pharmacy's detail header.
///
/// ## Returns
/// The pharmacy, its stats bar counters, and the documented API path, or
/// `ApiError::not_found` - which the frontend renders as the recoverable
/// not-found state with a link back to the listing.
pub fn get_pharmacy(catalog: &CatalogState, id: &str) -> Result<PharmacyDetailDto, ApiError> {
    debug!(id = %id, "get_pharmacy command");

    let pharmacy = catalog
        .inner()
        .pharmacy(id)
        .cloned()
        .ok_or_else(|| CoreError::PharmacyNotFound(id.to_string()))?;

    let stats = query::pharmacy_stats(catalog.inner().products(), id);

    Ok(PharmacyDetailDto {
        pharmacy: PharmacyDto::from(pharmacy),
        stats,
        api_path: public_api_path(id),
    })
}

/// Headline counters for the landing page (pharmacies, products, promotions).
pub fn get_directory_stats(catalog: &CatalogState) -> DirectoryStats {
    query::directory_stats(catalog.inner().pharmacies(), catalog.inner().products())
}

// =============================================================================
// Unit Tests
// =============================================================================
