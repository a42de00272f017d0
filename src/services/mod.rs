/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Background countdown driving the live round.
pub mod round_clock;
/// Score ledger operations.
pub mod score_service;
/// Session and round commands.
pub mod session_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
