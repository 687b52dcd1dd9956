//! # FarmaLocal Directory Library
//!
//! Core library for the FarmaLocal pharmacy directory backend.
//! This is the main entry point that wires state, commands, and logging.
//!
//! ## Module Organization
//! ```text
//! farma_directory/
//! ├── lib.rs           ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── catalog.rs   ◄─── Loaded catalog wrapper
//! │   └── location.rs  ◄─── Reference location (label + coordinates)
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── pharmacy.rs  ◄─── Directory listing / detail / stats commands
//! │   ├── product.rs   ◄─── Per-pharmacy catalog commands
//! │   ├── admin.rs     ◄─── Acknowledgement-only admin commands
//! │   └── location.rs  ◄─── Location detection task
//! └── error.rs         ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple Focused State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Directory State Management                            │
//! │                                                                         │
//! │  ┌──────────────────────────┐   ┌──────────────────────────────────┐   │
//! │  │      CatalogState        │   │          LocationState           │   │
//! │  │                          │   │                                  │   │
//! │  │  • Verified record set   │   │  • Banner label                  │   │
//! │  │  • Shared, read-only     │   │  • Reference coordinates         │   │
//! │  │    (Arc<Catalog>)        │   │    (Mutex, detection may update) │   │
//! │  └──────────────────────────┘   └──────────────────────────────────┘   │
//! │                                                                         │
//! │  Each command only requests the state it needs. The catalog never      │
//! │  changes after startup; only the reference location is mutable.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use commands::location::{detect_location, NoGeoProvider};
use farma_data::DataError;
use state::{CatalogState, LocationState};

/// Runs the directory backend.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load & Verify Catalog ────────────────────────────────────────────► │
/// │     • Built-in record set, referential checks at load time              │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: shared read-only catalog                            │
/// │     • LocationState: fallback reference ("București")                   │
/// │                                                                         │
/// │  4. Run One Location Detection ───────────────────────────────────────► │
/// │     • Headless hosts carry no geolocation capability, so this           │
/// │       resolves to the fallback label                                    │
/// │                                                                         │
/// │  5. Log Headline Stats & Exit ────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), DataError> {
    init_tracing();

    info!("Starting FarmaLocal directory backend");

    let catalog = CatalogState::load()?;
    let location = Arc::new(LocationState::new());

    let stats = commands::pharmacy::get_directory_stats(&catalog);
    info!(
        pharmacies = stats.pharmacies,
        products = stats.products,
        promotions = stats.promotions,
        "catalog ready"
    );

    // Headless hosts have no geolocation capability; the task resolves to
    // the fixed fallback label.
    match detect_location(location.clone(), Arc::new(NoGeoProvider)).await {
        Ok(label) => info!(label = %label, "reference location resolved"),
        Err(_) => info!(label = %location.label(), "detection cancelled, keeping fallback"),
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=farma=trace` - Show trace for farma crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,farma=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
