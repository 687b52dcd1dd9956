//! # Location State
//!
//! Holds the current location label and the reference coordinates the
//! distance chips are computed from.
//!
//! ## Thread Safety
//! The label and coordinates are wrapped in a `Mutex` because:
//! 1. The location-detection task writes the terminal outcome
//! 2. Listing commands read the reference point concurrently
//! 3. Only one writer should update the pair at a time
//!
//! The lock is held for a field copy only; nothing blocks on it.

use std::sync::Mutex;

/// The fixed fallback label, also the default before any detection runs.
pub const DEFAULT_LOCATION_LABEL: &str = "București";

/// Reference coordinates used before a successful detection
/// (București city centre).
const DEFAULT_REFERENCE: (f64, f64) = (44.4268, 26.1025);

#[derive(Debug, Clone)]
struct LocationInner {
    label: String,
    latitude: f64,
    longitude: f64,
}

/// The current location the directory is browsed from.
///
/// ## Invariants
/// - Always holds a usable label and coordinate pair; detection failure
///   resets to the fixed fallback rather than leaving a hole
/// - Has no effect on query-engine correctness, only on distance chips
#[derive(Debug)]
pub struct LocationState {
    inner: Mutex<LocationInner>,
}

impl LocationState {
    /// Creates the state with the fallback label and reference point.
    pub fn new() -> Self {
        LocationState {
            inner: Mutex::new(LocationInner {
                label: DEFAULT_LOCATION_LABEL.to_string(),
                latitude: DEFAULT_REFERENCE.0,
                longitude: DEFAULT_REFERENCE.1,
            }),
        }
    }

    /// The current location label.
    pub fn label(&self) -> String {
        match self.inner.lock() {
            Ok(inner) => inner.label.clone(),
            // A poisoned lock still holds a usable value
            Err(poisoned) => poisoned.into_inner().label.clone(),
        }
    }

    /// The current reference coordinates (latitude, longitude).
    pub fn reference(&self) -> (f64, f64) {
        match self.inner.lock() {
            Ok(inner) => (inner.latitude, inner.longitude),
            Err(poisoned) => {
                let inner = poisoned.into_inner();
                (inner.latitude, inner.longitude)
            }
        }
    }

    /// Records a successful detection outcome.
    pub fn set_detected(&self, label: &str, latitude: f64, longitude: f64) {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.label = label.to_string();
        inner.latitude = latitude;
        inner.longitude = longitude;
    }

    /// Resets to the fixed fallback (detection failed or unavailable).
    pub fn reset_to_fallback(&self) {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.label = DEFAULT_LOCATION_LABEL.to_string();
        inner.latitude = DEFAULT_REFERENCE.0;
        inner.longitude = DEFAULT_REFERENCE.1;
    }
}

impl Default for LocationState {
    fn default() -> Self {
        LocationState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = LocationState::new();
        assert_eq!(state.label(), DEFAULT_LOCATION_LABEL);
        assert_eq!(state.reference(), DEFAULT_REFERENCE);
    }

    #[test]
    fn test_detected_then_fallback() {
        let state = LocationState::new();

        state.set_detected("București (detectat automat)", 44.45, 26.08);
        assert_eq!(state.label(), "București (detectat automat)");
        assert_eq!(state.reference(), (44.45, 26.08));

        state.reset_to_fallback();
        assert_eq!(state.label(), DEFAULT_LOCATION_LABEL);
        assert_eq!(state.reference(), DEFAULT_REFERENCE);
    }
}
