//! Session-wide score tally.

use indexmap::IndexMap;
use thiserror::Error;

use crate::state::game::Player;

/// Errors raised by [`ScoreLedger::adjust`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The player is not part of this ledger's roster.
    #[error("player {0} is not on the scoreboard")]
    UnknownPlayer(Player),
}

/// Running scores keyed by player, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLedger {
    scores: IndexMap<Player, i32>,
}

impl ScoreLedger {
    /// Open a ledger where every roster member starts at zero.
    pub fn new(roster: &[Player]) -> Self {
        Self {
            scores: roster.iter().map(|player| (*player, 0)).collect(),
        }
    }

    /// Add `delta` to the player's total and return the new total.
    pub fn adjust(&mut self, player: Player, delta: i32) -> Result<i32, LedgerError> {
        let score = self
            .scores
            .get_mut(&player)
            .ok_or(LedgerError::UnknownPlayer(player))?;
        *score = score.saturating_add(delta);
        Ok(*score)
    }

    /// Current total of `player`.
    pub fn score(&self, player: Player) -> Option<i32> {
        self.scores.get(&player).copied()
    }

    /// Every total in roster order.
    pub fn snapshot(&self) -> Vec<(Player, i32)> {
        self.scores.iter().map(|(p, s)| (*p, *s)).collect()
    }

    /// Totals sorted by descending score; ties keep roster order.
    pub fn leaderboard(&self) -> Vec<(Player, i32)> {
        let mut entries = self.snapshot();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::game::ROSTER;

    #[test]
    fn starts_at_zero_for_everyone() {
        let ledger = ScoreLedger::new(&ROSTER);
        assert!(ledger.snapshot().iter().all(|(_, score)| *score == 0));
        assert_eq!(ledger.snapshot().len(), 4);
    }

    #[test]
    fn plus_then_minus_restores_the_score() {
        let mut ledger = ScoreLedger::new(&ROSTER);
        ledger.adjust(Player::WVish, 30).unwrap();
        assert_eq!(ledger.adjust(Player::WVish, 10), Ok(40));
        assert_eq!(ledger.adjust(Player::WVish, -10), Ok(30));
    }

    #[test]
    fn scores_can_go_negative() {
        let mut ledger = ScoreLedger::new(&ROSTER);
        assert_eq!(ledger.adjust(Player::Aziz, -10), Ok(-10));
        assert_eq!(ledger.adjust(Player::Aziz, -10), Ok(-20));
    }

    #[test]
    fn unknown_player_leaves_ledger_untouched() {
        let mut ledger = ScoreLedger::new(&[Player::Aman, Player::Amish]);
        let before = ledger.clone();
        assert_eq!(
            ledger.adjust(Player::Aziz, 10),
            Err(LedgerError::UnknownPlayer(Player::Aziz))
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn leaderboard_sorts_descending_with_stable_ties() {
        let mut ledger = ScoreLedger::new(&ROSTER);
        ledger.adjust(Player::Aman, 10).unwrap();
        ledger.adjust(Player::Amish, -10).unwrap();

        assert_eq!(
            ledger.leaderboard(),
            vec![
                (Player::Aman, 10),
                (Player::WVish, 0),
                (Player::Aziz, 0),
                (Player::Amish, -10),
            ]
        );
    }
}
