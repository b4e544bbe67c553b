//! Domain types shared across all fieldops services.
//!
//! Pure types with no framework dependencies: ids, roles, status labels and
//! pagination.

pub mod id;
pub mod pagination;
pub mod role;
pub mod status;
