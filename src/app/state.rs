use bevy::prelude::*;

/// High-level screen the player is on.
/// Start -> Playing -> Victory -> Start (loop)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Screen {
    /// Title screen; the start button narrates the intro, then play begins.
    #[default]
    Start,
    /// Active round loop: listen, then pick the matching picture.
    Playing,
    /// Full catalog cleared; shows the final score.
    Victory,
}
