use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{dto::validation::validate_player_name, state::game::Player};

/// Request to adjust a player's score by a delta.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreAdjustmentRequest {
    /// Roster name of the player, e.g. "Aman".
    pub player: String,
    /// Points to add; the game uses +10 and -10.
    pub delta: i32,
}

impl Validate for ScoreAdjustmentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_player_name(&self.player) {
            errors.add("player", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Result of a score adjustment, returning the updated tally.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreUpdateResponse {
    /// Player whose score changed.
    pub player: Player,
    /// Their new total.
    pub score: i32,
    /// Ranked leaderboard after the change.
    pub scores: Vec<ScoreEntry>,
}

/// One line of the leaderboard.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// 1-based position.
    pub rank: usize,
    /// Player on this line.
    pub player: Player,
    /// Current total.
    pub score: i32,
}

impl ScoreEntry {
    /// Number an already sorted leaderboard.
    pub fn ranked(leaderboard: &[(Player, i32)]) -> Vec<ScoreEntry> {
        leaderboard
            .iter()
            .enumerate()
            .map(|(position, (player, score))| ScoreEntry {
                rank: position + 1,
                player: *player,
                score: *score,
            })
            .collect()
    }
}

/// Response listing every player by descending score.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    /// Entries by descending score, ties in roster order.
    pub scores: Vec<ScoreEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_leaderboard_order() {
        let entries = ScoreEntry::ranked(&[(Player::Aziz, 20), (Player::Aman, 0)]);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].player, Player::Aziz);
        assert_eq!(entries[1].rank, 2);
    }

    #[test]
    fn blank_player_fails_validation() {
        let request = ScoreAdjustmentRequest {
            player: "  ".into(),
            delta: 10,
        };
        assert!(request.validate().is_err());

        let request = ScoreAdjustmentRequest {
            player: "Aziz".into(),
            delta: -10,
        };
        assert!(request.validate().is_ok());
    }
}
