use std::sync::Arc;

use crate::state::{
    game::QuizItem,
    timer::{Countdown, Tick},
};

/// Identifier of a round instance. Increases every time a fresh round starts.
pub type RoundId = u64;

/// Phases of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Countdown running, answer hidden.
    Active,
    /// Countdown stopped, answer shown. Only left by starting another round.
    Revealed(RevealCause),
}

/// What ended the [`RoundPhase::Active`] phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCause {
    /// Someone asked for the answer.
    Manual,
    /// The countdown reached zero.
    TimeUp,
}

/// Events the round controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// One second elapsed.
    Tick,
    /// Show the answer now.
    Reveal,
    /// Move on to the following item.
    Next,
    /// Go back to the preceding item.
    Previous,
    /// Record a player's pick among the riddle options.
    SelectOption(usize),
}

/// Observable effect of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Nothing changed.
    Ignored,
    /// The countdown moved; carries the remaining seconds.
    Ticked(u32),
    /// The round entered [`RoundPhase::Revealed`].
    Revealed(RevealCause),
    /// A fresh round started on another item.
    Started {
        /// Identifier of the new round.
        round_id: RoundId,
        /// Index of the item now displayed.
        index: usize,
    },
    /// The riddle selection changed.
    OptionSelected(usize),
}

/// Round state machine shared by every game mode.
///
/// Owns the position in the item sequence, the reveal gate, the riddle
/// selection and the countdown of the round in progress.
#[derive(Debug, Clone)]
pub struct RoundController {
    items: Arc<[QuizItem]>,
    index: usize,
    phase: RoundPhase,
    selection: Option<usize>,
    countdown: Countdown,
    round_id: RoundId,
}

impl RoundController {
    /// Start the first round on item 0 with a countdown of `duration_secs`.
    ///
    /// `items` must not be empty; only sets served by a
    /// [`ContentLibrary`](crate::state::content::ContentLibrary) reach here.
    pub(crate) fn with_duration(items: Arc<[QuizItem]>, first_round_id: RoundId, duration_secs: i64) -> Self {
        let mut controller = Self {
            items,
            index: 0,
            phase: RoundPhase::Active,
            selection: None,
            countdown: Countdown::new(duration_secs),
            round_id: first_round_id,
        };
        controller.start_round();
        controller
    }

    /// Feed an event and report what changed.
    pub fn apply(&mut self, event: RoundEvent) -> RoundOutcome {
        match (self.phase, event) {
            (RoundPhase::Active, RoundEvent::Tick) => match self.countdown.tick() {
                Tick::Running(remaining) => RoundOutcome::Ticked(remaining),
                Tick::Expired => self.reveal(RevealCause::TimeUp),
                Tick::Idle => RoundOutcome::Ignored,
            },
            (RoundPhase::Active, RoundEvent::Reveal) => self.reveal(RevealCause::Manual),
            (RoundPhase::Active, RoundEvent::SelectOption(option)) => {
                let in_range = self
                    .current_item()
                    .options()
                    .is_some_and(|options| option < options.len());
                if !in_range {
                    return RoundOutcome::Ignored;
                }
                self.selection = Some(option);
                RoundOutcome::OptionSelected(option)
            }
            (_, RoundEvent::Next) if self.has_next() => self.move_to(self.index + 1),
            (_, RoundEvent::Previous) if self.has_previous() => self.move_to(self.index - 1),
            _ => RoundOutcome::Ignored,
        }
    }

    /// Item of the round in progress.
    pub fn current_item(&self) -> &QuizItem {
        &self.items[self.index]
    }

    /// Position of the current item.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether the answer is shown.
    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, RoundPhase::Revealed(_))
    }

    /// Identifier of the round in progress.
    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// Riddle option picked during the round, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Whether the selection matches the correct option. Only known once
    /// revealed, and only for riddles with a selection.
    pub fn selection_correct(&self) -> Option<bool> {
        if !self.is_revealed() {
            return None;
        }
        let correct = self.current_item().correct_option()?;
        self.selection.map(|selected| selected == correct)
    }

    /// The round countdown.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Whether the countdown is still running.
    pub fn is_timer_running(&self) -> bool {
        self.countdown.is_active()
    }

    /// Whether a following item exists.
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    /// Whether a preceding item exists.
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    fn reveal(&mut self, cause: RevealCause) -> RoundOutcome {
        self.countdown.stop();
        self.phase = RoundPhase::Revealed(cause);
        RoundOutcome::Revealed(cause)
    }

    fn move_to(&mut self, index: usize) -> RoundOutcome {
        self.index = index;
        self.round_id += 1;
        self.start_round();
        RoundOutcome::Started {
            round_id: self.round_id,
            index,
        }
    }

    fn start_round(&mut self) {
        self.selection = None;
        self.phase = match self.countdown.reset() {
            Tick::Expired => RoundPhase::Revealed(RevealCause::TimeUp),
            Tick::Running(_) | Tick::Idle => RoundPhase::Active,
        };
    }
}
