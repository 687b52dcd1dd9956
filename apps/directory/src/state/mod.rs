//! # Directory State Types
//!
//! Focused state types, one per concern, instead of a single `AppState`:
//! each command only receives the state it needs.
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────────┐
//! │   CatalogState   │ │    LocationState     │
//! │                  │ │                      │
//! │  • Loaded data   │ │  • Location label    │
//! │  • Read-only     │ │  • Reference coords  │
//! └──────────────────┘ └──────────────────────┘
//! ```

mod catalog;
mod location;

pub use catalog::CatalogState;
pub use location::{LocationState, DEFAULT_LOCATION_LABEL};
