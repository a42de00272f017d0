use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "ok", or "degraded" when the live round has no running clock.
    pub status: String,
}

impl HealthResponse {
    /// Everything is ticking as expected.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    /// The session is reachable but its countdown is stuck.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
        }
    }
}
