//! HTTP surface of the portfolio backend.
//!
//! Exposes the building blocks (configuration, shared state, error
//! mapping, routes, router assembly) as a library so the binary
//! entrypoint and the integration tests assemble the exact same app.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
