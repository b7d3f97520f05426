//! Shared vocabulary for the back-office service.
//!
//! Domain types used by both the database layer and the API layer: id and
//! timestamp aliases, the role model, the permission vocabulary, soft-delete
//! filters, and the domain error type.

pub mod error;
pub mod filter;
pub mod identity;
pub mod permissions;
pub mod roles;
pub mod types;
