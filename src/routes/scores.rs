use axum::{Json, Router, extract::State, routing::get};
use validator::Validate;

use crate::{
    dto::score::{LeaderboardResponse, ScoreAdjustmentRequest, ScoreUpdateResponse},
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Routes for the score ledger.
pub fn router() -> Router<SharedState> {
    Router::new().route("/scores", get(leaderboard).post(adjust_score))
}

/// Adjust a player's score.
#[utoipa::path(
    post,
    path = "/scores",
    tag = "scores",
    request_body = ScoreAdjustmentRequest,
    responses(
        (status = 200, description = "Score updated", body = ScoreUpdateResponse),
        (status = 400, description = "Malformed player name"),
        (status = 404, description = "Player not on the roster"),
        (status = 409, description = "Player is refereeing the current round")
    )
)]
pub async fn adjust_score(
    State(state): State<SharedState>,
    Json(payload): Json<ScoreAdjustmentRequest>,
) -> Result<Json<ScoreUpdateResponse>, AppError> {
    payload.validate()?;
    let response = score_service::adjust_score(&state, payload).await?;
    Ok(Json(response))
}

/// Players by descending score.
#[utoipa::path(
    get,
    path = "/scores",
    tag = "scores",
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardResponse)
    )
)]
pub async fn leaderboard(State(state): State<SharedState>) -> Json<LeaderboardResponse> {
    Json(score_service::leaderboard(&state).await)
}
