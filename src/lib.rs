//! Library crate for scoopcast-back, exposing modules for binaries and integration tests.

pub mod config;
/// Request and response payloads.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP route handlers.
pub mod routes;
/// Operations behind the routes.
pub mod services;
/// In-memory session state.
pub mod state;
