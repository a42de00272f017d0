use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Length of a round, in seconds.
pub const ROUND_DURATION_SECS: i64 = 18;
/// Remaining time at or below which the countdown is flagged as running out.
pub const WARNING_THRESHOLD_SECS: u32 = 5;
/// Magnitude of a single manual score adjustment.
pub const SCORE_STEP: i32 = 10;

/// One of the four participants of a session.
///
/// The declaration order is the roster order and is used to break
/// leaderboard ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Player {
    /// First on the roster.
    Aman,
    /// Second on the roster.
    Amish,
    /// Third on the roster.
    WVish,
    /// Last on the roster.
    Aziz,
}

/// Fixed roster, in declaration order.
pub const ROSTER: [Player; 4] = [Player::Aman, Player::Amish, Player::WVish, Player::Aziz];

impl Player {
    /// Display name of the player.
    pub fn name(self) -> &'static str {
        match self {
            Player::Aman => "Aman",
            Player::Amish => "Amish",
            Player::WVish => "WVish",
            Player::Aziz => "Aziz",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not belong to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown player `{0}`")]
pub struct UnknownPlayer(pub String);

impl FromStr for Player {
    type Err = UnknownPlayer;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ROSTER
            .iter()
            .copied()
            .find(|player| player.name() == value)
            .ok_or_else(|| UnknownPlayer(value.to_string()))
    }
}

/// Game modes selectable from the session shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Guess the Hollywood movie from a frame.
    Hollywood,
    /// Guess the Indian movie from a frame.
    Indian,
    /// Multiple-choice riddles and quizzes.
    Riddles,
    /// Guess the movie from a line of dialogue.
    Dialogues,
}

impl GameMode {
    /// Every mode, in menu order.
    pub const ALL: [GameMode; 4] = [
        GameMode::Hollywood,
        GameMode::Indian,
        GameMode::Riddles,
        GameMode::Dialogues,
    ];

    /// Human readable title of the mode.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Hollywood => "Guess the Hollywood Frame",
            GameMode::Indian => "Guess the Indian Movie Frame",
            GameMode::Riddles => "Riddles & Quizzes",
            GameMode::Dialogues => "Guess the Dialogues",
        }
    }
}

/// A single quiz entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuizItem {
    /// A still frame whose movie must be named.
    Frame {
        /// Location of the image.
        image_url: String,
        /// Title of the movie.
        answer: String,
    },
    /// A quoted line whose movie must be named.
    Dialogue {
        /// The quoted line.
        line: String,
        /// Who says it.
        context: String,
        /// Title of the movie.
        answer: String,
    },
    /// A riddle with distractor options.
    Riddle {
        /// The riddle text.
        question: String,
        /// Candidate answers shown to the players.
        options: Vec<String>,
        /// Index of the correct entry in `options`.
        correct_option: usize,
        /// Shown alongside the answer once revealed.
        explanation: String,
    },
}

impl QuizItem {
    /// Options a player may pick from, for items that carry them.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuizItem::Riddle { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Index of the correct option, for items that carry options.
    pub fn correct_option(&self) -> Option<usize> {
        match self {
            QuizItem::Riddle { correct_option, .. } => Some(*correct_option),
            _ => None,
        }
    }

    /// The answer text revealed at the end of the round.
    pub fn answer(&self) -> &str {
        match self {
            QuizItem::Frame { answer, .. } | QuizItem::Dialogue { answer, .. } => answer,
            QuizItem::Riddle {
                options,
                correct_option,
                ..
            } => options
                .get(*correct_option)
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    /// Extra text revealed with the answer, if any.
    pub fn explanation(&self) -> Option<&str> {
        match self {
            QuizItem::Riddle { explanation, .. } => Some(explanation),
            _ => None,
        }
    }
}
