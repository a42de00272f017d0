use crate::{
    dto::{
        score::ScoreEntry,
        session::{AnswerView, RoundView, referee_label},
        sse::{
            ModeChangedEvent, OptionSelectedEvent, RoundRevealedEvent, RoundStartedEvent,
            RoundTickEvent, ScoreAdjustedEvent, ServerEvent,
        },
    },
    state::{Session, SessionChange, SharedState, game::Player, round::RoundPhase},
};

const EVENT_ROUND_STARTED: &str = "round.started";
const EVENT_ROUND_TICK: &str = "round.tick";
const EVENT_ROUND_REVEALED: &str = "round.revealed";
const EVENT_ROUND_OPTION: &str = "round.option";
const EVENT_MODE_CHANGED: &str = "mode.changed";
const EVENT_SCORE_ADJUSTED: &str = "score.adjusted";
const EVENT_INFO: &str = "info";

/// Broadcast whatever `change` did to the session.
pub fn broadcast_change(state: &SharedState, session: &Session, change: SessionChange) {
    match change {
        SessionChange::None => {}
        SessionChange::Ticked(remaining) => {
            let payload = RoundTickEvent {
                round_id: session.round().round_id(),
                time_remaining: remaining,
                time_warning: session.round().countdown().is_warning(),
            };
            state.events().publish(EVENT_ROUND_TICK, &payload);
        }
        SessionChange::Revealed(cause) => {
            let round = session.round();
            let payload = RoundRevealedEvent {
                round_id: round.round_id(),
                cause: cause.into(),
                answer: AnswerView::from(round.current_item()),
                selected_option: round.selection(),
                selection_correct: round.selection_correct(),
            };
            state.events().publish(EVENT_ROUND_REVEALED, &payload);
        }
        SessionChange::RoundStarted(_) => {
            let view = session.view();
            let payload = RoundStartedEvent {
                mode: view.mode,
                referee: referee_label(&view),
                round: RoundView::from(&view),
            };
            state.events().publish(EVENT_ROUND_STARTED, &payload);

            // a zero-length round expires as it starts
            if let RoundPhase::Revealed(cause) = session.round().phase() {
                broadcast_change(state, session, SessionChange::Revealed(cause));
            }
        }
        SessionChange::OptionSelected(index) => {
            let payload = OptionSelectedEvent {
                round_id: session.round().round_id(),
                index,
            };
            state.events().publish(EVENT_ROUND_OPTION, &payload);
        }
    }
}

/// Broadcast that `session` switched mode.
pub fn broadcast_mode_changed(state: &SharedState, session: &Session) {
    let mode = session.mode();
    let payload = ModeChangedEvent {
        mode,
        label: mode.label().to_string(),
    };
    state.events().publish(EVENT_MODE_CHANGED, &payload);
}

/// Broadcast a score change together with the refreshed leaderboard.
pub fn broadcast_score_adjusted(
    state: &SharedState,
    session: &Session,
    player: Player,
    delta: i32,
    score: i32,
) {
    let payload = ScoreAdjustedEvent {
        player,
        delta,
        score,
        scores: ScoreEntry::ranked(&session.ledger().leaderboard()),
    };
    state.events().publish(EVENT_SCORE_ADJUSTED, &payload);
}

/// Send a human-readable info message onto the stream.
pub fn broadcast_info(state: &SharedState, message: &str) {
    state.events().send(ServerEvent::text(EVENT_INFO, message));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::{SeedableRng, rngs::StdRng};
    use serde_json::Value;
    use tokio::{
        sync::broadcast::Receiver,
        time::advance,
    };

    use crate::{
        dto::{
            score::ScoreAdjustmentRequest,
            session::{SelectModeRequest, SelectOptionRequest},
        },
        services::{round_clock, score_service, session_service},
        state::{
            AppState, Session, SharedState, TICK_PERIOD,
            content::ContentLibrary,
            game::{GameMode, ROSTER},
        },
    };

    use super::*;

    fn state_with_duration(duration_secs: i64) -> SharedState {
        let session = Session::with_settings(
            ContentLibrary::default(),
            StdRng::seed_from_u64(8),
            duration_secs,
        );
        AppState::with_session(session, TICK_PERIOD)
    }

    fn drain(receiver: &mut Receiver<ServerEvent>) -> Vec<(String, Value)> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            let data = serde_json::from_str(&event.data).unwrap_or(Value::String(event.data));
            events.push((event.event.unwrap_or_default(), data));
        }
        events
    }

    fn names(events: &[(String, Value)]) -> Vec<&str> {
        events.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn mode_switch_announces_the_mode_before_the_round() {
        let state = state_with_duration(18);
        let mut receiver = state.events().subscribe();

        session_service::select_mode(
            &state,
            SelectModeRequest {
                mode: GameMode::Riddles,
            },
        )
        .await;

        let events = drain(&mut receiver);
        assert_eq!(names(&events), ["mode.changed", "round.started"]);
        assert_eq!(events[0].1["mode"], "riddles");

        let started = &events[1].1;
        assert_eq!(started["round"]["round_id"], 2);
        assert_eq!(started["round"]["item"]["kind"], "riddle");
        assert!(started["round"].get("answer").is_none());
        assert!(started["round"]["item"].get("correct_option").is_none());
        assert!(started["round"]["item"].get("explanation").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn time_up_reveal_carries_answer_and_selection() {
        let state = state_with_duration(18);
        let mut receiver = state.events().subscribe();
        session_service::select_mode(
            &state,
            SelectModeRequest {
                mode: GameMode::Riddles,
            },
        )
        .await;
        session_service::select_option(&state, SelectOptionRequest { index: 1 }).await;

        for _ in 0..18 {
            advance(Duration::from_secs(1)).await;
            for _ in 0..8 {
                tokio::task::yield_now().await;
            }
        }

        let events = drain(&mut receiver);
        let option = events.iter().find(|(name, _)| name == "round.option").unwrap();
        assert_eq!(option.1["index"], 1);

        let ticks = events.iter().filter(|(name, _)| name == "round.tick").count();
        assert_eq!(ticks, 17);

        let (name, revealed) = events.last().unwrap();
        assert_eq!(name, "round.revealed");
        assert_eq!(revealed["cause"], "time_up");
        assert_eq!(revealed["answer"]["answer"], "A Keyboard");
        assert_eq!(revealed["answer"]["correct_option"], 1);
        assert_eq!(revealed["selected_option"], 1);
        assert_eq!(revealed["selection_correct"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn score_change_is_broadcast_with_the_ranked_board() {
        let state = state_with_duration(18);
        let referee = state.read_session(|s| s.referee()).await;
        let player = ROSTER
            .into_iter()
            .find(|player| Some(*player) != referee)
            .unwrap();
        let mut receiver = state.events().subscribe();

        score_service::adjust_score(
            &state,
            ScoreAdjustmentRequest {
                player: player.name().to_string(),
                delta: 10,
            },
        )
        .await
        .unwrap();

        let events = drain(&mut receiver);
        assert_eq!(names(&events), ["score.adjusted"]);
        let payload = &events[0].1;
        assert_eq!(payload["player"], player.name());
        assert_eq!(payload["delta"], 10);
        assert_eq!(payload["score"], 10);
        assert_eq!(payload["scores"][0]["rank"], 1);
        assert_eq!(payload["scores"][0]["player"], player.name());
        assert_eq!(payload["scores"].as_array().unwrap().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn refused_score_change_is_not_broadcast() {
        let state = state_with_duration(18);
        let referee = state.read_session(|s| s.referee()).await.unwrap();
        let mut receiver = state.events().subscribe();

        let result = score_service::adjust_score(
            &state,
            ScoreAdjustmentRequest {
                player: referee.name().to_string(),
                delta: 10,
            },
        )
        .await;

        assert!(result.is_err());
        assert!(drain(&mut receiver).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_length_round_is_revealed_as_it_starts() {
        let state = state_with_duration(0);
        round_clock::start(&state).await;
        let mut receiver = state.events().subscribe();

        session_service::next(&state).await;

        let events = drain(&mut receiver);
        assert_eq!(names(&events), ["round.started", "round.revealed"]);
        assert_eq!(events[1].1["cause"], "time_up");
        assert_eq!(events[1].1["round_id"], events[0].1["round"]["round_id"]);
        assert!(!state.lock_session().await.has_live_ticker());
    }
}
