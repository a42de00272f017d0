use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::session::{ModesResponse, SelectModeRequest, SessionResponse},
    services::session_service,
    state::SharedState,
};

/// Routes exposing the session and mode selection.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/session/mode", post(select_mode))
        .route("/modes", get(list_modes))
}

/// Current session snapshot.
#[utoipa::path(
    get,
    path = "/session",
    tag = "session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse)
    )
)]
pub async fn get_session(State(state): State<SharedState>) -> Json<SessionResponse> {
    Json(session_service::get_session(&state).await)
}

/// Switch the active game mode and restart it at its first item.
#[utoipa::path(
    post,
    path = "/session/mode",
    tag = "session",
    request_body = SelectModeRequest,
    responses(
        (status = 200, description = "Mode selected", body = SessionResponse),
        (status = 422, description = "Unknown mode")
    )
)]
pub async fn select_mode(
    State(state): State<SharedState>,
    Json(payload): Json<SelectModeRequest>,
) -> Json<SessionResponse> {
    Json(session_service::select_mode(&state, payload).await)
}

/// Selectable modes with their labels and item counts.
#[utoipa::path(
    get,
    path = "/modes",
    tag = "session",
    responses(
        (status = 200, description = "Available modes", body = ModesResponse)
    )
)]
pub async fn list_modes(State(state): State<SharedState>) -> Json<ModesResponse> {
    Json(session_service::list_modes(&state).await)
}
