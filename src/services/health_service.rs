use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report `ok`, or `degraded` when the live round lost its tick source.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let slot = state.lock_session().await;
    let round = slot.session.round();
    if round.is_timer_running() && !slot.has_live_ticker() {
        warn!(
            round_id = round.round_id(),
            "countdown running without a tick source"
        );
        return HealthResponse::degraded();
    }
    HealthResponse::ok()
}
