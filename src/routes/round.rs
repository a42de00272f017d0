use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::session::{SelectOptionRequest, SessionResponse},
    services::session_service,
    state::SharedState,
};

/// Routes driving the round in progress. Commands that do not apply in the
/// current phase answer with the unchanged session.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/round/next", post(next))
        .route("/round/previous", post(previous))
        .route("/round/reveal", post(reveal))
        .route("/round/option", post(select_option))
}

/// Move to the next item.
#[utoipa::path(
    post,
    path = "/round/next",
    tag = "round",
    responses(
        (status = 200, description = "Session after navigation", body = SessionResponse)
    )
)]
pub async fn next(State(state): State<SharedState>) -> Json<SessionResponse> {
    Json(session_service::next(&state).await)
}

/// Move to the previous item.
#[utoipa::path(
    post,
    path = "/round/previous",
    tag = "round",
    responses(
        (status = 200, description = "Session after navigation", body = SessionResponse)
    )
)]
pub async fn previous(State(state): State<SharedState>) -> Json<SessionResponse> {
    Json(session_service::previous(&state).await)
}

/// Reveal the answer and stop the countdown.
#[utoipa::path(
    post,
    path = "/round/reveal",
    tag = "round",
    responses(
        (status = 200, description = "Session after reveal", body = SessionResponse)
    )
)]
pub async fn reveal(State(state): State<SharedState>) -> Json<SessionResponse> {
    Json(session_service::reveal(&state).await)
}

/// Pick one of the riddle options.
#[utoipa::path(
    post,
    path = "/round/option",
    tag = "round",
    request_body = SelectOptionRequest,
    responses(
        (status = 200, description = "Session after selection", body = SessionResponse)
    )
)]
pub async fn select_option(
    State(state): State<SharedState>,
    Json(payload): Json<SelectOptionRequest>,
) -> Json<SessionResponse> {
    Json(session_service::select_option(&state, payload).await)
}
