use tracing::warn;

use crate::{
    dto::score::{LeaderboardResponse, ScoreAdjustmentRequest, ScoreEntry, ScoreUpdateResponse},
    error::ServiceError,
    services::sse_events,
    state::{SharedState, game::Player},
};

/// Apply a score delta to a roster player and broadcast the new tally.
pub async fn adjust_score(
    state: &SharedState,
    request: ScoreAdjustmentRequest,
) -> Result<ScoreUpdateResponse, ServiceError> {
    let player: Player = request.player.parse()?;

    let mut slot = state.lock_session().await;
    let score = slot
        .session
        .adjust_score(player, request.delta)
        .inspect_err(|err| warn!(%player, delta = request.delta, error = %err, "score change refused"))?;

    sse_events::broadcast_score_adjusted(state, &slot.session, player, request.delta, score);
    Ok(ScoreUpdateResponse {
        player,
        score,
        scores: ScoreEntry::ranked(&slot.session.ledger().leaderboard()),
    })
}

/// Players ordered by descending score, ties in roster order.
pub async fn leaderboard(state: &SharedState) -> LeaderboardResponse {
    let board = state.read_session(|session| session.ledger().leaderboard()).await;
    LeaderboardResponse {
        scores: ScoreEntry::ranked(&board),
    }
}
