use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::catalog::Catalog;

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Outcome of a guess submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// Guess dropped: narration in flight, or no target selected.
    Ignored,
    /// Target found; `finished` means this was the last remaining item.
    Correct { finished: bool },
    /// Wrong tile; state untouched.
    Incorrect,
}

/// One play-through of the catalog. Pure state: every transition is an
/// ordinary method so the rules can be tested without an `App` or any
/// rendering surface. Invariants (checked by tests):
///  - `target`, when set, is a member of `remaining`
///  - `score == 10 * (catalog_len - remaining.len())`
///  - `remaining` holds no duplicates and only ever shrinks until `reset`
#[derive(Debug, Resource, Clone)]
pub struct GameSession {
    catalog_len: usize,
    score: u32,
    remaining: Vec<String>,
    target: Option<String>,
    heard: bool,
}

impl GameSession {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            catalog_len: catalog.len(),
            score: 0,
            remaining: catalog.items().to_vec(),
            target: None,
            heard: false,
        }
    }

    /// Pure-logic constructor for tests and tools.
    pub fn from_items<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        let remaining: Vec<String> = items.into_iter().map(Into::into).collect();
        Self {
            catalog_len: remaining.len(),
            score: 0,
            remaining,
            target: None,
            heard: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.catalog_len as u32 * POINTS_PER_CORRECT
    }

    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Whether the current target's narration has completed at least once.
    pub fn heard(&self) -> bool {
        self.heard
    }

    pub fn finished(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Select a uniformly random element of `remaining` as the new target.
    /// Sole selection policy: no weighting, no recent-item exclusion.
    /// Returns `None` (and mutates nothing) once the catalog is exhausted.
    pub fn start_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        let picked = self.remaining.choose(rng)?.clone();
        self.target = Some(picked);
        self.heard = false;
        self.target.as_deref()
    }

    /// Judge a clicked tile. No-op while narration is busy or no round is
    /// active. A correct guess removes the target, awards points, and ends
    /// the round (the next target is picked by `start_round`).
    pub fn submit_guess(&mut self, name: &str, audio_busy: bool) -> Guess {
        if audio_busy {
            return Guess::Ignored;
        }
        let Some(target) = self.target.as_deref() else {
            return Guess::Ignored;
        };
        if name != target {
            return Guess::Incorrect;
        }
        self.remaining.retain(|item| item != name);
        self.score += POINTS_PER_CORRECT;
        self.target = None;
        self.heard = false;
        Guess::Correct {
            finished: self.remaining.is_empty(),
        }
    }

    /// Record that the current target's narration finished playing.
    pub fn mark_heard(&mut self, name: &str) {
        if self.target.as_deref() == Some(name) {
            self.heard = true;
        }
    }

    /// The remaining items in a fresh random display order.
    pub fn shuffled_remaining<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut names = self.remaining.clone();
        names.shuffle(rng);
        names
    }

    /// Back to the freshly-created state (full catalog, zero score).
    pub fn reset(&mut self, catalog: &Catalog) {
        *self = Self::new(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(n: usize) -> GameSession {
        GameSession::from_items((0..n).map(|i| format!("item{i}")))
    }

    #[test]
    fn round_target_comes_from_remaining() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = session(5);
        let target = s.start_round(&mut rng).unwrap().to_string();
        assert!(s.remaining().contains(&target));
    }

    #[test]
    fn correct_guess_scores_and_shrinks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = session(5);
        let target = s.start_round(&mut rng).unwrap().to_string();
        let verdict = s.submit_guess(&target, false);
        assert_eq!(verdict, Guess::Correct { finished: false });
        assert_eq!(s.score(), POINTS_PER_CORRECT);
        assert_eq!(s.remaining().len(), 4);
        assert!(!s.remaining().contains(&target));
        assert!(s.target().is_none());
    }

    #[test]
    fn wrong_guess_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = session(5);
        s.start_round(&mut rng);
        let before = s.clone();
        for _ in 0..10 {
            assert_eq!(s.submit_guess("not an item", false), Guess::Incorrect);
        }
        assert_eq!(s.score(), before.score());
        assert_eq!(s.remaining(), before.remaining());
        assert_eq!(s.target(), before.target());
    }

    #[test]
    fn busy_gate_drops_guesses() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = session(5);
        let target = s.start_round(&mut rng).unwrap().to_string();
        assert_eq!(s.submit_guess(&target, true), Guess::Ignored);
        assert_eq!(s.score(), 0);
        assert_eq!(s.remaining().len(), 5);
        assert_eq!(s.target(), Some(target.as_str()));
    }

    #[test]
    fn no_target_means_ignored() {
        let mut s = session(5);
        assert_eq!(s.submit_guess("item0", false), Guess::Ignored);
        assert_eq!(s.remaining().len(), 5);
    }

    #[test]
    fn exhausted_catalog_yields_no_round() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = session(0);
        assert!(s.start_round(&mut rng).is_none());
    }

    #[test]
    fn heard_tracks_current_target_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = session(3);
        let target = s.start_round(&mut rng).unwrap().to_string();
        s.mark_heard("something else");
        assert!(!s.heard());
        s.mark_heard(&target);
        assert!(s.heard());
        s.submit_guess(&target, false);
        assert!(!s.heard());
    }
}
