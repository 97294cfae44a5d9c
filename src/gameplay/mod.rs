//! Game rules: the session state, the round loop and the confetti.

pub mod celebration;
pub mod rounds;
pub mod session;

pub use celebration::{CelebrationBurst, CelebrationPlugin};
pub use rounds::{GuessJudged, GuessSubmitted, RoundStarted, RoundsPlugin};
pub use session::{GameSession, Guess, POINTS_PER_CORRECT};
