//! Plumbing shared by fieldops services: health probes, request-id and trace
//! middleware, tracing initialization and serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
