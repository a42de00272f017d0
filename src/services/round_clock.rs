//! Tick source of the live round.
//!
//! Each round with a running countdown gets its own task. The task handle
//! lives next to the session in [`SessionSlot`], so whoever replaces or
//! reveals the round swaps the task under the same lock.

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::{
    services::sse_events,
    state::{SessionChange, SessionSlot, SharedState, round::RoundId},
};

/// Start ticking the round the session opened with.
pub async fn start(state: &SharedState) {
    let mut slot = state.lock_session().await;
    let round_id = slot.session.round().round_id();
    sync_ticker(state, &mut slot, SessionChange::RoundStarted(round_id));
}

/// Bring the tick source in line with `change`. Must be called while the
/// lock that produced `change` is still held.
pub fn sync_ticker(state: &SharedState, slot: &mut SessionSlot, change: SessionChange) {
    match change {
        SessionChange::RoundStarted(round_id) => {
            if slot.session.round().is_timer_running() {
                let first_tick = Instant::now() + state.tick_period();
                let handle = tokio::spawn(run(state.clone(), round_id, first_tick));
                slot.replace_ticker(handle);
            } else {
                slot.stop_ticker();
            }
        }
        SessionChange::Revealed(_) => slot.stop_ticker(),
        SessionChange::None | SessionChange::Ticked(_) | SessionChange::OptionSelected(_) => {}
    }
}

async fn run(state: SharedState, round_id: RoundId, first_tick: Instant) {
    let mut interval = interval_at(first_tick, state.tick_period());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let mut slot = state.lock_session().await;
        let change = slot.session.tick(round_id);
        match change {
            SessionChange::Ticked(remaining) => {
                debug!(round_id, remaining, "round tick");
                sse_events::broadcast_change(&state, &slot.session, change);
            }
            SessionChange::Revealed(_) => {
                sse_events::broadcast_change(&state, &slot.session, change);
                slot.release_ticker();
                break;
            }
            _ => {
                debug!(round_id, "tick source no longer current; stopping");
                break;
            }
        }
    }
}
