//! DTOs describing the session, its round and the available modes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::{
        format_system_time,
        phase::{VisibleRevealCause, VisibleRoundPhase},
        score::ScoreEntry,
    },
    state::{
        SessionView,
        game::{GameMode, QuizItem, SCORE_STEP},
    },
};

/// Request switching the active game mode.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectModeRequest {
    /// Mode to start.
    pub mode: GameMode,
}

/// Request recording a riddle option pick.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectOptionRequest {
    /// 0-based option index. Out-of-range picks are ignored.
    pub index: usize,
}

/// One selectable mode.
#[derive(Debug, Serialize, ToSchema)]
pub struct ModeSummary {
    /// Mode identifier.
    pub mode: GameMode,
    /// Menu label.
    pub label: String,
    /// Number of items in the set.
    pub items: usize,
}

/// Response listing the selectable modes.
#[derive(Debug, Serialize, ToSchema)]
pub struct ModesResponse {
    /// Mode currently played.
    pub active: GameMode,
    /// Every mode, in menu order.
    pub modes: Vec<ModeSummary>,
}

/// Item content as shown to the players. Answer fields stay empty until the
/// round is revealed.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemView {
    /// Movie still.
    Frame {
        /// Location of the still.
        image_url: String,
    },
    /// Quoted movie line.
    Dialogue {
        /// The quoted line.
        line: String,
        /// Who says it, or where.
        context: String,
    },
    /// Multiple-choice question.
    Riddle {
        /// The question.
        question: String,
        /// Options in display order.
        options: Vec<String>,
    },
}

impl From<&QuizItem> for ItemView {
    fn from(item: &QuizItem) -> Self {
        match item {
            QuizItem::Frame { image_url, .. } => ItemView::Frame {
                image_url: image_url.clone(),
            },
            QuizItem::Dialogue { line, context, .. } => ItemView::Dialogue {
                line: line.clone(),
                context: context.clone(),
            },
            QuizItem::Riddle {
                question, options, ..
            } => ItemView::Riddle {
                question: question.clone(),
                options: options.clone(),
            },
        }
    }
}

/// Answer details, present once revealed.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct AnswerView {
    /// Expected answer.
    pub answer: String,
    /// Riddle explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Index of the right riddle option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<usize>,
}

impl From<&QuizItem> for AnswerView {
    fn from(item: &QuizItem) -> Self {
        Self {
            answer: item.answer().to_string(),
            explanation: item.explanation().map(str::to_string),
            correct_option: item.correct_option(),
        }
    }
}

/// State of the round in progress.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Increases every time a fresh round starts.
    pub round_id: u64,
    /// 0-based item position.
    pub index: usize,
    /// Items in the active set.
    pub total: usize,
    /// Active or revealed.
    pub phase: VisibleRoundPhase,
    /// Set once revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal_cause: Option<VisibleRevealCause>,
    /// Seconds left.
    pub time_remaining: u32,
    /// Full round length in seconds.
    pub duration: u32,
    /// True when the remaining time should be flagged (5 seconds or less).
    pub time_warning: bool,
    /// Question side of the item.
    pub item: ItemView,
    /// Present once revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<AnswerView>,
    /// Riddle option picked so far.
    pub selected_option: Option<usize>,
    /// Whether the selected option was right; only set once revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_correct: Option<bool>,
    /// An earlier item exists.
    pub has_previous: bool,
    /// A later item exists.
    pub has_next: bool,
}

impl From<&SessionView> for RoundView {
    fn from(view: &SessionView) -> Self {
        Self {
            round_id: view.round_id,
            index: view.index,
            total: view.total,
            phase: if view.revealed {
                VisibleRoundPhase::Revealed
            } else {
                VisibleRoundPhase::Active
            },
            reveal_cause: view.reveal_cause.map(Into::into),
            time_remaining: view.time_remaining,
            duration: view.duration,
            time_warning: view.time_warning,
            item: (&view.item).into(),
            answer: view.revealed.then(|| (&view.item).into()),
            selected_option: view.selection,
            selection_correct: view.selection_correct,
            has_previous: view.has_previous,
            has_next: view.has_next,
        }
    }
}

/// Full session snapshot returned by every session command.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Identifier of this process's session.
    pub session_id: Uuid,
    /// Session start, RFC 3339.
    pub started_at: String,
    /// Active mode.
    pub mode: GameMode,
    /// Menu label of the active mode.
    pub mode_label: String,
    /// Round on screen.
    pub round: RoundView,
    /// Name of the referee of this round, or "None".
    pub referee: String,
    /// Ranked leaderboard.
    pub scores: Vec<ScoreEntry>,
    /// Points awarded or taken by one score button press.
    pub score_step: i32,
}

impl SessionResponse {
    /// Build the response for the session identified by `session_id`.
    pub fn new(session_id: Uuid, started_at: std::time::SystemTime, view: &SessionView) -> Self {
        Self {
            session_id,
            started_at: format_system_time(started_at),
            mode: view.mode,
            mode_label: view.mode.label().to_string(),
            round: view.into(),
            referee: referee_label(view),
            scores: ScoreEntry::ranked(&view.leaderboard),
            score_step: SCORE_STEP,
        }
    }
}

/// Referee name for display, "None" when no referee is assigned.
pub fn referee_label(view: &SessionView) -> String {
    view.referee
        .map(|player| player.name().to_string())
        .unwrap_or_else(|| "None".to_string())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::state::{Session, content::ContentLibrary};

    #[test]
    fn answer_is_hidden_until_revealed() {
        let mut session = Session::with_rng(ContentLibrary::default(), StdRng::seed_from_u64(5));
        session.select_mode(GameMode::Riddles);

        let round = RoundView::from(&session.view());
        assert_eq!(round.phase, VisibleRoundPhase::Active);
        assert!(round.answer.is_none());
        let json = serde_json::to_value(&round).unwrap();
        assert!(json.get("answer").is_none());
        assert!(json["item"].get("correct_option").is_none());

        session.reveal();
        let round = RoundView::from(&session.view());
        let answer = round.answer.unwrap();
        assert_eq!(answer.answer, "A Keyboard");
        assert_eq!(answer.correct_option, Some(1));
        assert!(answer.explanation.is_some());
    }

    #[test]
    fn item_view_is_tagged_by_kind() {
        let item = QuizItem::Dialogue {
            line: "May the Force be with you.".into(),
            context: "Multiple characters".into(),
            answer: "Star Wars".into(),
        };
        let json = serde_json::to_value(ItemView::from(&item)).unwrap();
        assert_eq!(json["kind"], "dialogue");
        assert!(json.get("answer").is_none());
    }
}
