use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI JSON.
pub mod docs;
/// `/healthcheck`.
pub mod health;
/// `/round/*` navigation, reveal and option picks.
pub mod round;
/// `/scores`.
pub mod scores;
/// `/session` and `/modes`.
pub mod session;
/// `/sse` event stream.
pub mod sse;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(session::router())
        .merge(round::router())
        .merge(scores::router())
        .merge(sse::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
