//! # Directory Commands
//!
//! The functions a frontend shell binds to, one module per page surface:
//!
//! ```text
//! commands/
//! ├── pharmacy.rs  ◄─── directory listing, detail header, headline stats
//! ├── product.rs   ◄─── one pharmacy's catalog
//! ├── admin.rs     ◄─── add/edit/delete/refresh acknowledgements
//! └── location.rs  ◄─── "detect my location" task
//! ```
//!
//! Every command re-runs the full query engine over the complete in-memory
//! record set; the collections are small and nothing here memoizes.

pub mod admin;
pub mod location;
pub mod pharmacy;
pub mod product;
