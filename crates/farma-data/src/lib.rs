//! # farma-data: Static Data Provider
//!
//! Supplies the two read-only collections the directory operates on:
//! pharmacies and products. The collections are built once at startup from
//! seeded fixtures and verified before being handed out; consumers read them
//! for the duration of the process.
//!
//! ## Module Organization
//! ```text
//! farma_data/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── provider.rs     ◄─── Catalog handle + integrity verification
//! ├── fixtures.rs     ◄─── Seeded pharmacy and product records
//! └── error.rs        ◄─── DataError
//! ```
//!
//! The query engine in `farma-core` does not know or care that this provider
//! is a set of in-process fixtures; swapping in a file or a remote API later
//! only means producing the same two collections.

pub mod error;
pub mod fixtures;
pub mod provider;

pub use error::DataError;
pub use provider::Catalog;
