//! Session context: active mode, its round, the referee cycle and the scores.

use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::state::{
    content::ContentLibrary,
    game::{GameMode, Player, QuizItem, ROSTER, ROUND_DURATION_SECS},
    ledger::{LedgerError, ScoreLedger},
    referee::RefereeRotation,
    round::{RevealCause, RoundController, RoundEvent, RoundId, RoundOutcome, RoundPhase},
};

/// Errors surfaced by session operations. Navigation never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Score change refused by the ledger.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// The referee adjudicates the round and cannot be scored during it.
    #[error("{0} is refereeing this round and cannot be scored")]
    RefereeCannotScore(Player),
}

/// What a session operation changed, used to drive the tick source and
/// notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    /// Nothing changed.
    None,
    /// The countdown moved.
    Ticked(u32),
    /// The round ended and the answer is shown.
    Revealed(RevealCause),
    /// A fresh round started (navigation or mode switch).
    RoundStarted(RoundId),
    /// The riddle selection changed.
    OptionSelected(usize),
}

/// Read-only projection of the session used by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Active mode.
    pub mode: GameMode,
    /// Id of the round on screen.
    pub round_id: RoundId,
    /// Position of the current item in the mode's set.
    pub index: usize,
    /// Number of items in the set.
    pub total: usize,
    /// Current item, answer included; callers decide what to show.
    pub item: QuizItem,
    /// Whether the answer is shown.
    pub revealed: bool,
    /// Why the round was revealed, if it was.
    pub reveal_cause: Option<RevealCause>,
    /// Seconds left on the countdown.
    pub time_remaining: u32,
    /// Full round length in seconds.
    pub duration: u32,
    /// Countdown is running and at or below the warning threshold.
    pub time_warning: bool,
    /// Referee of this round; never scored while in charge.
    pub referee: Option<Player>,
    /// Riddle option picked so far.
    pub selection: Option<usize>,
    /// Whether the pick was right; set once revealed.
    pub selection_correct: Option<bool>,
    /// An earlier item exists.
    pub has_previous: bool,
    /// A later item exists.
    pub has_next: bool,
    /// Players by descending score, ties in roster order.
    pub leaderboard: Vec<(Player, i32)>,
}

/// Explicitly owned game session. Created at start-up and kept for the
/// life of the process.
#[derive(Debug)]
pub struct Session {
    content: ContentLibrary,
    mode: GameMode,
    round: RoundController,
    referees: RefereeRotation,
    ledger: ScoreLedger,
    duration_secs: i64,
    rng: StdRng,
}

impl Session {
    /// Open a session on the first mode, seeded from the OS.
    pub fn new(content: ContentLibrary) -> Self {
        Self::with_rng(content, StdRng::from_os_rng())
    }

    /// Open a session with an explicit random source.
    pub fn with_rng(content: ContentLibrary, rng: StdRng) -> Self {
        Self::with_settings(content, rng, ROUND_DURATION_SECS)
    }

    /// Open a session with an explicit random source and round length.
    pub fn with_settings(content: ContentLibrary, rng: StdRng, duration_secs: i64) -> Self {
        let mode = GameMode::ALL[0];
        let round = RoundController::with_duration(content.items(mode), 1, duration_secs);
        let mut session = Self {
            content,
            mode,
            round,
            referees: RefereeRotation::new(&ROSTER),
            ledger: ScoreLedger::new(&ROSTER),
            duration_secs,
            rng,
        };
        session.assign_referee();
        session
    }

    /// Switch to `mode`, restarting at its first item.
    pub fn select_mode(&mut self, mode: GameMode) -> SessionChange {
        let round_id = self.round.round_id() + 1;
        self.mode = mode;
        self.round =
            RoundController::with_duration(self.content.items(mode), round_id, self.duration_secs);
        info!(?mode, round_id, "game mode selected");
        self.assign_referee();
        SessionChange::RoundStarted(round_id)
    }

    /// Advance to the next item. No-op on the last item.
    pub fn next(&mut self) -> SessionChange {
        self.apply(RoundEvent::Next)
    }

    /// Go back to the previous item. No-op on the first item.
    pub fn previous(&mut self) -> SessionChange {
        self.apply(RoundEvent::Previous)
    }

    /// Show the answer. No-op once revealed.
    pub fn reveal(&mut self) -> SessionChange {
        self.apply(RoundEvent::Reveal)
    }

    /// Record a riddle option pick for the current round.
    pub fn select_option(&mut self, option: usize) -> SessionChange {
        self.apply(RoundEvent::SelectOption(option))
    }

    /// Apply a one-second tick issued for `round_id`. Ticks for any other
    /// round are discarded.
    pub fn tick(&mut self, round_id: RoundId) -> SessionChange {
        if round_id != self.round.round_id() {
            debug!(
                round_id,
                current = self.round.round_id(),
                "discarding tick from a superseded round"
            );
            return SessionChange::None;
        }
        self.apply(RoundEvent::Tick)
    }

    /// Add `delta` to a player's score, returning the new total.
    pub fn adjust_score(&mut self, player: Player, delta: i32) -> Result<i32, SessionError> {
        if self.referees.current() == Some(player) {
            return Err(SessionError::RefereeCannotScore(player));
        }
        let score = self.ledger.adjust(player, delta)?;
        info!(%player, delta, score, "score adjusted");
        Ok(score)
    }

    /// Active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Round in progress.
    pub fn round(&self) -> &RoundController {
        &self.round
    }

    /// Referee of the round in progress.
    pub fn referee(&self) -> Option<Player> {
        self.referees.current()
    }

    /// Score tally.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Loaded content.
    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }

    /// Snapshot for display.
    pub fn view(&self) -> SessionView {
        let round = &self.round;
        let countdown = round.countdown();
        let reveal_cause = match round.phase() {
            RoundPhase::Revealed(cause) => Some(cause),
            RoundPhase::Active => None,
        };

        SessionView {
            mode: self.mode,
            round_id: round.round_id(),
            index: round.index(),
            total: round.len(),
            item: round.current_item().clone(),
            revealed: round.is_revealed(),
            reveal_cause,
            time_remaining: countdown.remaining(),
            duration: countdown.duration(),
            time_warning: countdown.is_warning(),
            referee: self.referees.current(),
            selection: round.selection(),
            selection_correct: round.selection_correct(),
            has_previous: round.has_previous(),
            has_next: round.has_next(),
            leaderboard: self.ledger.leaderboard(),
        }
    }

    fn apply(&mut self, event: RoundEvent) -> SessionChange {
        match self.round.apply(event) {
            RoundOutcome::Ignored => SessionChange::None,
            RoundOutcome::Ticked(remaining) => SessionChange::Ticked(remaining),
            RoundOutcome::Revealed(cause) => {
                info!(round_id = self.round.round_id(), ?cause, "answer revealed");
                SessionChange::Revealed(cause)
            }
            RoundOutcome::OptionSelected(option) => SessionChange::OptionSelected(option),
            RoundOutcome::Started { round_id, index } => {
                info!(round_id, index, mode = ?self.mode, "round started");
                self.assign_referee();
                SessionChange::RoundStarted(round_id)
            }
        }
    }

    fn assign_referee(&mut self) {
        let referee = self.referees.begin_round(&mut self.rng);
        debug!(?referee, used = self.referees.used().len(), "referee assigned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::with_rng(ContentLibrary::default(), StdRng::seed_from_u64(11))
    }

    fn non_referee(session: &Session) -> Player {
        ROSTER
            .into_iter()
            .find(|player| Some(*player) != session.referee())
            .unwrap()
    }

    #[test]
    fn new_session_starts_first_mode_with_a_referee() {
        let session = session();
        let view = session.view();
        assert_eq!(view.mode, GameMode::Hollywood);
        assert_eq!(view.index, 0);
        assert!(!view.revealed);
        assert_eq!(view.time_remaining, 18);
        assert!(view.referee.is_some());
        assert!(view.leaderboard.iter().all(|(_, score)| *score == 0));
    }

    #[test]
    fn every_new_round_gets_a_new_referee_within_the_cycle() {
        let mut session = session();
        session.select_mode(GameMode::Dialogues);
        let mut picks = vec![session.referee().unwrap()];
        session.next();
        picks.push(session.referee().unwrap());
        session.previous();
        picks.push(session.referee().unwrap());

        picks.sort();
        picks.dedup();
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn no_op_navigation_keeps_the_referee() {
        let mut session = session();
        let referee = session.referee();
        assert_eq!(session.previous(), SessionChange::None);
        assert_eq!(session.referee(), referee);
    }

    #[test]
    fn stale_ticks_are_discarded() {
        let mut session = session();
        let old_round = session.round().round_id();
        session.next();
        let before = session.view();

        assert_eq!(session.tick(old_round), SessionChange::None);
        assert_eq!(session.view(), before);

        let current = session.round().round_id();
        assert_eq!(session.tick(current), SessionChange::Ticked(17));
    }

    #[test]
    fn riddle_round_reveals_after_eighteen_ticks() {
        let mut session = session();
        let SessionChange::RoundStarted(round_id) = session.select_mode(GameMode::Riddles) else {
            panic!("mode switch must start a round");
        };
        for _ in 0..17 {
            session.tick(round_id);
        }
        assert_eq!(
            session.tick(round_id),
            SessionChange::Revealed(RevealCause::TimeUp)
        );
        let view = session.view();
        assert!(view.revealed);
        assert_eq!(view.time_remaining, 0);
        assert_eq!(session.reveal(), SessionChange::None);
    }

    #[test]
    fn mode_switch_keeps_scores_and_restarts_at_first_item() {
        let mut session = session();
        let player = non_referee(&session);
        session.adjust_score(player, 10).unwrap();
        session.next();

        session.select_mode(GameMode::Riddles);
        assert_eq!(session.round().index(), 0);
        assert_eq!(session.ledger().score(player), Some(10));
    }

    #[test]
    fn referee_cannot_be_scored() {
        let mut session = session();
        let referee = session.referee().unwrap();
        assert_eq!(
            session.adjust_score(referee, 10),
            Err(SessionError::RefereeCannotScore(referee))
        );
        assert_eq!(session.ledger().score(referee), Some(0));
    }

    #[test]
    fn answer_fields_follow_the_reveal() {
        let mut session = session();
        session.select_mode(GameMode::Riddles);
        session.select_option(1);
        assert_eq!(session.view().selection_correct, None);
        session.reveal();
        let view = session.view();
        assert_eq!(view.reveal_cause, Some(RevealCause::Manual));
        assert_eq!(view.selection_correct, Some(true));
    }
}
