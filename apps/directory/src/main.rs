//! # FarmaLocal Directory Entry Point
//!
//! Binary entry for the pharmacy directory backend.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FarmaLocal Directory                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Frontend Shell                               │  │
//! │  │  • Directory grid        • Detail page with catalog filters      │  │
//! │  │  • Admin panel (toasts)  • Location banner                       │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                        invoke('command')                                │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                   Rust Backend (this crate)                       │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► list_pharmacies, list_products, save_product,    │  │
//! │  │                detect_location                                   │  │
//! │  │  state/ ─────► CatalogState, LocationState                      │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │              farma-core (pure query engine)                      │  │
//! │  │              farma-data (verified built-in catalog)              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use farma_data::DataError;

#[tokio::main]
async fn main() -> Result<(), DataError> {
    // The actual setup is in lib.rs for better testability
    farma_directory::run().await
}
