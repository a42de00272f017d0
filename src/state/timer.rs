//! Per-round countdown. Pure state; the tick source lives in
//! [`crate::services::round_clock`].

use crate::state::game::WARNING_THRESHOLD_SECS;

/// Result of feeding one tick (or a reset) into a [`Countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; carries the remaining seconds.
    Running(u32),
    /// Reached zero on this tick. Reported once per round.
    Expired,
    /// The countdown is not active; nothing changed.
    Idle,
}

/// Countdown from a fixed duration down to zero, one second per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// Build an inactive countdown. Zero or negative durations clamp to zero,
    /// which expires as soon as the countdown is reset.
    pub fn new(duration_secs: i64) -> Self {
        let duration = u32::try_from(duration_secs.max(0)).unwrap_or(u32::MAX);
        Self {
            duration,
            remaining: duration,
            active: false,
        }
    }

    /// Refill to the full duration and start counting.
    ///
    /// Returns [`Tick::Expired`] straight away for a zero duration, in which
    /// case the countdown stays inactive.
    pub fn reset(&mut self) -> Tick {
        self.remaining = self.duration;
        if self.duration == 0 {
            self.active = false;
            return Tick::Expired;
        }
        self.active = true;
        Tick::Running(self.remaining)
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.active {
            return Tick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            return Tick::Expired;
        }

        Tick::Running(self.remaining)
    }

    /// Freeze the countdown at its current value.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Seconds left in the round.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Full length of a round.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Whether ticks currently decrement the countdown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the remaining time should be flagged as running out.
    pub fn is_warning(&self) -> bool {
        self.remaining <= WARNING_THRESHOLD_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_one_per_tick_and_expires_once() {
        let mut countdown = Countdown::new(18);
        assert_eq!(countdown.reset(), Tick::Running(18));

        let mut previous = countdown.remaining();
        for _ in 0..17 {
            match countdown.tick() {
                Tick::Running(remaining) => {
                    assert_eq!(remaining, previous - 1);
                    previous = remaining;
                }
                other => panic!("unexpected tick outcome {other:?}"),
            }
        }

        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn inactive_countdown_does_not_move() {
        let mut countdown = Countdown::new(18);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining(), 18);

        countdown.reset();
        countdown.tick();
        countdown.stop();
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining(), 17);
    }

    #[test]
    fn reset_refills_and_reactivates() {
        let mut countdown = Countdown::new(3);
        countdown.reset();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.tick(), Tick::Expired);

        assert_eq!(countdown.reset(), Tick::Running(3));
        assert!(countdown.is_active());
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn zero_or_negative_duration_expires_immediately() {
        for duration in [0, -5] {
            let mut countdown = Countdown::new(duration);
            assert_eq!(countdown.duration(), 0);
            assert_eq!(countdown.reset(), Tick::Expired);
            assert!(!countdown.is_active());
            assert_eq!(countdown.tick(), Tick::Idle);
        }
    }

    #[test]
    fn warning_starts_at_five_seconds() {
        let mut countdown = Countdown::new(7);
        countdown.reset();
        assert!(!countdown.is_warning());
        countdown.tick();
        assert!(!countdown.is_warning());
        countdown.tick();
        assert_eq!(countdown.remaining(), 5);
        assert!(countdown.is_warning());
    }
}
