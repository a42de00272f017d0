use serde::Serialize;
use utoipa::ToSchema;

use crate::state::round::RevealCause;

/// Round phase as exposed to clients (REST/SSE).
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisibleRoundPhase {
    /// Countdown running, answer hidden.
    Active,
    /// Answer shown.
    Revealed,
}

/// Why the answer was shown.
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisibleRevealCause {
    /// Revealed on request.
    Manual,
    /// The countdown ran out.
    TimeUp,
}

impl From<RevealCause> for VisibleRevealCause {
    fn from(value: RevealCause) -> Self {
        match value {
            RevealCause::Manual => VisibleRevealCause::Manual,
            RevealCause::TimeUp => VisibleRevealCause::TimeUp,
        }
    }
}
