//! HTTP API layer.
//!
//! Exposes the screening, remedy and facility logic as JSON endpoints
//! for the companion form. Routes are nested under `/api/`.
//!
//! The router is composable — `api_router()` returns a `Router` that
//! can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use types::ApiContext;
