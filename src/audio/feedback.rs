use bevy::audio::{PlaybackMode, Volume};
use bevy::prelude::*;

use crate::core::catalog::GameAssets;
use crate::core::config::GameConfig;
use crate::gameplay::rounds::GuessJudged;
use crate::gameplay::session::Guess;

/// Plays the short correct/incorrect jingles. These are fire-and-forget:
/// they do not take the narration busy flag and may overlap the next spoken
/// word. Ignored guesses (busy gate) produce no sound at all.
pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, play_feedback_sounds);
    }
}

fn play_feedback_sounds(
    mut commands: Commands,
    mut judged: EventReader<GuessJudged>,
    assets: Option<Res<GameAssets>>,
    cfg: Res<GameConfig>,
) {
    for event in judged.read() {
        let Some(assets) = assets.as_ref() else {
            continue;
        };
        let handle = match event.verdict {
            Guess::Correct { .. } => assets.correct.clone(),
            Guess::Incorrect => assets.incorrect.clone(),
            Guess::Ignored => continue,
        };
        commands.spawn((
            AudioPlayer(handle),
            PlaybackSettings {
                mode: PlaybackMode::Despawn,
                volume: Volume::Linear(cfg.audio.feedback_volume.max(0.0)),
                ..default()
            },
            Name::new("feedback"),
        ));
    }
}
