use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::{
        phase::VisibleRevealCause,
        score::ScoreEntry,
        session::{AnswerView, RoundView},
    },
    state::game::{GameMode, Player},
};

#[derive(Clone, Debug)]
/// Dispatched payload carried across SSE channels.
pub struct ServerEvent {
    /// SSE event name; `None` sends an unnamed event.
    pub event: Option<String>,
    /// Serialised payload.
    pub data: String,
}

impl ServerEvent {
    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }

    /// Plain-text event.
    pub fn text(event: &str, data: impl Into<String>) -> Self {
        Self {
            event: Some(event.to_string()),
            data: data.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when the active mode changes.
pub struct ModeChangedEvent {
    /// Newly active mode.
    pub mode: GameMode,
    /// Its menu label.
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when a fresh round starts.
pub struct RoundStartedEvent {
    /// Mode the round belongs to.
    pub mode: GameMode,
    /// Referee name, or "None".
    pub referee: String,
    /// Round snapshot, answer withheld.
    pub round: RoundView,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast on every countdown tick.
pub struct RoundTickEvent {
    /// Round the tick belongs to.
    pub round_id: u64,
    /// Seconds left.
    pub time_remaining: u32,
    /// At or below the warning threshold.
    pub time_warning: bool,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when the answer is shown.
pub struct RoundRevealedEvent {
    /// Round being revealed.
    pub round_id: u64,
    /// Manual reveal or time up.
    pub cause: VisibleRevealCause,
    /// Answer details.
    pub answer: AnswerView,
    /// Riddle pick, frozen at reveal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<usize>,
    /// Whether the pick was right.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_correct: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when the riddle selection changes.
pub struct OptionSelectedEvent {
    /// Round the pick belongs to.
    pub round_id: u64,
    /// Picked option.
    pub index: usize,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast after a score adjustment.
pub struct ScoreAdjustedEvent {
    /// Player whose score changed.
    pub player: Player,
    /// Applied delta.
    pub delta: i32,
    /// Their new total.
    pub score: i32,
    /// Ranked leaderboard after the change.
    pub scores: Vec<ScoreEntry>,
}
