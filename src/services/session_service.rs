use tracing::info;

use crate::{
    dto::session::{
        ModeSummary, ModesResponse, SelectModeRequest, SelectOptionRequest, SessionResponse,
    },
    services::{round_clock, sse_events},
    state::{Session, SessionChange, SessionSlot, SharedState, game::GameMode},
};

/// Return the current session snapshot.
pub async fn get_session(state: &SharedState) -> SessionResponse {
    let view = state.read_session(Session::view).await;
    SessionResponse::new(state.id(), state.started_at(), &view)
}

/// List every mode with its label and number of items.
pub async fn list_modes(state: &SharedState) -> ModesResponse {
    state
        .read_session(|session| ModesResponse {
            active: session.mode(),
            modes: GameMode::ALL
                .into_iter()
                .map(|mode| ModeSummary {
                    mode,
                    label: mode.label().to_string(),
                    items: session.content().items(mode).len(),
                })
                .collect(),
        })
        .await
}

/// Switch mode, restarting at its first item even when it is already active.
pub async fn select_mode(state: &SharedState, request: SelectModeRequest) -> SessionResponse {
    let mut slot = state.lock_session().await;
    let change = slot.session.select_mode(request.mode);
    sse_events::broadcast_mode_changed(state, &slot.session);
    finish(state, &mut slot, change)
}

/// Advance to the next item; no-op on the last one.
pub async fn next(state: &SharedState) -> SessionResponse {
    run(state, Session::next).await
}

/// Go back one item; no-op on the first one.
pub async fn previous(state: &SharedState) -> SessionResponse {
    run(state, Session::previous).await
}

/// Show the answer of the current round; no-op once revealed.
pub async fn reveal(state: &SharedState) -> SessionResponse {
    run(state, Session::reveal).await
}

/// Record a riddle option pick. Ignored outside an active riddle round or
/// for an index past the last option.
pub async fn select_option(state: &SharedState, request: SelectOptionRequest) -> SessionResponse {
    run(state, |session| session.select_option(request.index)).await
}

async fn run<F>(state: &SharedState, operation: F) -> SessionResponse
where
    F: FnOnce(&mut Session) -> SessionChange,
{
    let mut slot = state.lock_session().await;
    let change = operation(&mut slot.session);
    if change == SessionChange::None {
        info!("session command ignored in current state");
    }
    finish(state, &mut slot, change)
}

/// Sync the clock, notify listeners and snapshot, all under the lock.
fn finish(state: &SharedState, slot: &mut SessionSlot, change: SessionChange) -> SessionResponse {
    round_clock::sync_ticker(state, slot, change);
    sse_events::broadcast_change(state, &slot.session, change);
    SessionResponse::new(state.id(), state.started_at(), &slot.session.view())
}
