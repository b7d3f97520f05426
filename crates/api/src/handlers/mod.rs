//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type,
//! following the same guard-clause sequence: resolve identity (extractor),
//! check the permission gate, run one repository operation, shape the
//! envelope. Errors map through [`crate::error::AppError`].

pub mod cities;
pub mod dropshippers;
pub mod orders;
pub mod products;
pub mod shopify;
pub mod staff;
pub mod states;
pub mod suppliers;
pub mod warehouses;
