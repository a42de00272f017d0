//! Referee rotation: one referee per round, no repeats within a cycle.

use rand::{Rng, seq::IndexedRandom};

use crate::state::game::Player;

/// Pick a referee uniformly among the roster members not in `used`.
///
/// Returns `None` when every roster member has already been used; callers
/// clear their used set before asking again.
pub fn select_referee<R>(roster: &[Player], used: &[Player], rng: &mut R) -> Option<Player>
where
    R: Rng + ?Sized,
{
    let candidates = roster
        .iter()
        .copied()
        .filter(|player| !used.contains(player))
        .collect::<Vec<_>>();
    candidates.choose(rng).copied()
}

/// Referee cycle state carried by the session.
#[derive(Debug, Clone)]
pub struct RefereeRotation {
    roster: Vec<Player>,
    used: Vec<Player>,
    current: Option<Player>,
}

impl RefereeRotation {
    /// Start a rotation over `roster` with nobody used yet.
    pub fn new(roster: &[Player]) -> Self {
        Self {
            roster: roster.to_vec(),
            used: Vec::with_capacity(roster.len()),
            current: None,
        }
    }

    /// Assign the referee of a fresh round.
    ///
    /// A cycle that already covers the roster is cleared first, so any
    /// player may be picked again.
    pub fn begin_round<R>(&mut self, rng: &mut R) -> Option<Player>
    where
        R: Rng + ?Sized,
    {
        if self.used.len() >= self.roster.len() {
            self.used.clear();
        }

        let pick = select_referee(&self.roster, &self.used, rng);
        if let Some(player) = pick {
            self.used.push(player);
        }
        self.current = pick;
        pick
    }

    /// Referee of the round in progress.
    pub fn current(&self) -> Option<Player> {
        self.current
    }

    /// Players already used in the current cycle, in pick order.
    pub fn used(&self) -> &[Player] {
        &self.used
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::state::game::ROSTER;

    #[test]
    fn never_picks_a_used_player() {
        let mut rng = StdRng::seed_from_u64(7);
        let used = [Player::Aman, Player::Aziz];
        for _ in 0..200 {
            let pick = select_referee(&ROSTER, &used, &mut rng).unwrap();
            assert!(!used.contains(&pick));
        }
    }

    #[test]
    fn exhausted_candidates_yield_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_referee(&ROSTER, &ROSTER, &mut rng), None);
    }

    #[test]
    fn picks_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let used = [Player::Amish];
        let trials = 9_000;
        let mut counts: HashMap<Player, u32> = HashMap::new();
        for _ in 0..trials {
            let pick = select_referee(&ROSTER, &used, &mut rng).unwrap();
            *counts.entry(pick).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        assert!(!counts.contains_key(&Player::Amish));
        let expected = trials / 3;
        for (player, count) in counts {
            let deviation = count.abs_diff(expected);
            assert!(
                deviation < expected / 10,
                "{player} picked {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn a_cycle_covers_the_roster_before_repeating() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rotation = RefereeRotation::new(&ROSTER);

        let mut seen = HashSet::new();
        for _ in 0..ROSTER.len() {
            let pick = rotation.begin_round(&mut rng).unwrap();
            assert!(seen.insert(pick), "{pick} picked twice in one cycle");
            assert_eq!(rotation.current(), Some(pick));
        }
        assert_eq!(rotation.used().len(), ROSTER.len());

        let fifth = rotation.begin_round(&mut rng).unwrap();
        assert!(ROSTER.contains(&fifth));
        assert_eq!(rotation.used(), &[fifth]);
    }

    #[test]
    fn fifth_pick_can_repeat_any_player() {
        let mut fifth_picks = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut rotation = RefereeRotation::new(&ROSTER);
            for _ in 0..ROSTER.len() {
                rotation.begin_round(&mut rng);
            }
            fifth_picks.insert(rotation.begin_round(&mut rng).unwrap());
        }
        assert_eq!(fifth_picks.len(), ROSTER.len());
    }
}
