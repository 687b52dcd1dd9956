//! # Location Commands
//!
//! The "detect my location" affordance on the directory banner.
//!
//! ## Task Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Location Detection Task                                │
//! │                                                                         │
//! │  Button "Detectează locația"                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  detect_location(state, provider) ──► JoinHandle<String>                │
//! │       │                    (abortable: navigating away cancels it)      │
//! │       ▼                                                                 │
//! │  provider.current_position()                                            │
//! │       │                                                                 │
//! │       ├── Some(pos) ──► "București (detectat automat)" + new reference  │
//! │       │                                                                 │
//! │       └── None ───────► fixed fallback "București"                      │
//! │                                                                         │
//! │  Exactly two terminal outcomes, both a plain label. No subscription,    │
//! │  no retries, no effect on query-engine correctness.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::state::{LocationState, DEFAULT_LOCATION_LABEL};

/// Label shown after a successful detection. A real deployment would reverse
/// geocode the coordinates; the directory only serves Bucharest today, so
/// the label is fixed and the coordinates feed the distance chips.
pub const DETECTED_LOCATION_LABEL: &str = "București (detectat automat)";

/// A detected position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Source of the device position.
///
/// The command layer does not care whether this is a browser geolocation
/// bridge, an OS service, or a test double; absence of the capability and
/// user denial both surface as `None`.
pub trait GeoProvider: Send + Sync + 'static {
    fn current_position(&self) -> Option<GeoPosition>;
}

/// A provider for hosts without any geolocation capability.
#[derive(Debug, Default)]
pub struct NoGeoProvider;

impl GeoProvider for NoGeoProvider {
    fn current_position(&self) -> Option<GeoPosition> {
        None
    }
}

/// Starts the detection task and returns its handle.
///
/// Fire-and-forget: the caller may await the terminal label, or drop/abort
/// the handle (e.g. the user navigated away) - the state still ends up with
/// a usable label either way, because the fallback is also the default.
pub fn detect_location(
    state: Arc<LocationState>,
    provider: Arc<dyn GeoProvider>,
) -> JoinHandle<String> {
    tokio::spawn(async move {
        debug!("location detection started");

        // Providers may block on an OS service; keep the runtime responsive.
        let position = tokio::task::spawn_blocking(move || provider.current_position())
            .await
            .unwrap_or(None);

        let label = match position {
            Some(pos) => {
                state.set_detected(DETECTED_LOCATION_LABEL, pos.latitude, pos.longitude);
                DETECTED_LOCATION_LABEL.to_string()
            }
            None => {
                state.reset_to_fallback();
                DEFAULT_LOCATION_LABEL.to_string()
            }
        };

        info!(label = %label, "location detection finished");
        label
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
