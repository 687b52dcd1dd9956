//! # Geographic Distance
//!
//! Great-circle distance math for the "pharmacies near you" affordance.
//!
//! The directory shows an optional distance chip on each pharmacy card,
//! computed from the current reference location. This is display math, not
//! navigation: haversine over a spherical Earth is accurate to well under a
//! percent at city scale, which is all the chip needs.

/// Mean Earth radius in kilometres (IUGG value).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometres.
///
/// Inputs are decimal degrees. Pure math, no failure modes.
///
/// ## Example
/// ```rust
/// use farma_core::geo::haversine_km;
///
/// // Piața Victoriei to Piața Unirii, București: roughly 3.5 km
/// let d = haversine_km(44.4525, 26.0855, 44.4275, 26.1031);
/// assert!((d - 3.1).abs() < 0.5);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Distance rounded to one decimal, the precision the distance chip renders.
pub fn display_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    (haversine_km(lat1, lon1, lat2, lon2) * 10.0).round() / 10.0
}

// =============================================================================
// Unit Tests
// =============================================================================
