use bevy::prelude::*;
use std::time::Duration;

use crate::core::catalog::GameAssets;
use crate::core::components::SpeakerFace;
use crate::core::config::GameConfig;

use super::voice::VoiceState;

/// Mouth-flap state for the narrator portrait. Ticks only while narration
/// plays; any other frame the portrait is forced back to the closed frame,
/// so the animation never outlives its voice (error paths included).
#[derive(Resource)]
struct SpeakerAnimation {
    timer: Timer,
    open: bool,
}

pub struct SpeakerPlugin;

impl Plugin for SpeakerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_speaker_animation)
            .add_systems(Update, animate_speaker);
    }
}

fn setup_speaker_animation(mut commands: Commands, cfg: Res<GameConfig>) {
    let interval = cfg.speaker.frame_interval;
    if interval > 0.0 {
        commands.insert_resource(SpeakerAnimation {
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
            open: false,
        });
    }
}

fn animate_speaker(
    time: Res<Time>,
    voice: Res<VoiceState>,
    assets: Option<Res<GameAssets>>,
    anim: Option<ResMut<SpeakerAnimation>>,
    mut q_faces: Query<&mut ImageNode, With<SpeakerFace>>,
) {
    let (Some(assets), Some(mut anim)) = (assets, anim) else {
        return;
    };
    if voice.is_busy() {
        anim.timer.tick(time.delta());
        if anim.timer.just_finished() {
            anim.open = !anim.open;
            let frame = if anim.open {
                &assets.speaker_open
            } else {
                &assets.speaker_closed
            };
            for mut face in q_faces.iter_mut() {
                face.image = frame.clone();
            }
        }
    } else if anim.open || anim.timer.elapsed() != Duration::ZERO {
        anim.timer.reset();
        anim.open = false;
        for mut face in q_faces.iter_mut() {
            face.image = assets.speaker_closed.clone();
        }
    }
}
