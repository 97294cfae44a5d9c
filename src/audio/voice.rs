use bevy::asset::LoadState;
use bevy::audio::{AudioSinkPlayback, PlaybackMode, Volume};
use bevy::prelude::*;

use crate::core::catalog::{Catalog, GameAssets};
use crate::core::config::GameConfig;

/// Which narration clip to speak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceKind {
    /// Welcome speech on the start screen.
    Intro,
    /// The spoken name of a catalog object.
    Object(String),
}

impl VoiceKind {
    fn asset_path(&self) -> String {
        match self {
            VoiceKind::Intro => crate::core::catalog::manifest::INTRO_AUDIO.to_string(),
            VoiceKind::Object(name) => Catalog::audio_path(name),
        }
    }
}

/// Request narration. Dropped (not queued) if narration is already playing.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PlayVoice {
    pub kind: VoiceKind,
}

/// Narration actually began this frame.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct VoiceStarted {
    pub kind: VoiceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceOutcome {
    /// Playback ran to its natural end.
    Completed,
    /// The clip failed to load or play; logged, never retried.
    Failed,
}

/// Narration stopped. Fires exactly once per started voice, on every exit
/// path, so listeners can rely on it for cleanup.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct VoiceFinished {
    pub kind: VoiceKind,
    pub outcome: VoiceOutcome,
}

/// The single busy flag: at most one narration is in flight at a time.
/// Feedback sounds bypass this on purpose (they are fire-and-forget).
#[derive(Resource, Default, Debug)]
pub struct VoiceState {
    /// The narration currently in flight, if any. Only the voice systems
    /// write this; everyone else reads it through `is_busy`.
    pub playing: Option<VoiceKind>,
}

impl VoiceState {
    pub fn is_busy(&self) -> bool {
        self.playing.is_some()
    }

    pub fn playing(&self) -> Option<&VoiceKind> {
        self.playing.as_ref()
    }
}

/// Marks the entity carrying the in-flight narration's audio sink.
#[derive(Component)]
struct NarrationAudio {
    kind: VoiceKind,
}

pub struct VoicePlugin;

impl Plugin for VoicePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VoiceState>()
            .add_event::<PlayVoice>()
            .add_event::<VoiceStarted>()
            .add_event::<VoiceFinished>()
            .add_systems(Update, (handle_voice_requests, watch_narration).chain());
    }
}

fn handle_voice_requests(
    mut commands: Commands,
    mut requests: EventReader<PlayVoice>,
    mut started: EventWriter<VoiceStarted>,
    mut finished: EventWriter<VoiceFinished>,
    mut voice: ResMut<VoiceState>,
    assets: Option<Res<GameAssets>>,
    cfg: Res<GameConfig>,
) {
    for request in requests.read() {
        if voice.is_busy() {
            info!(target: "audio", "Voice: '{:?}' dropped (narration in flight)", request.kind);
            continue;
        }
        let Some(assets) = assets.as_ref() else {
            warn!(target: "audio", "Voice: assets not loaded yet; '{:?}' dropped", request.kind);
            continue;
        };
        let handle = match &request.kind {
            VoiceKind::Intro => Some(assets.intro.clone()),
            VoiceKind::Object(name) => assets.words.get(name).cloned(),
        };
        let Some(handle) = handle else {
            error!(
                target: "audio",
                "Voice: no audio registered for '{}'",
                request.kind.asset_path()
            );
            finished.write(VoiceFinished {
                kind: request.kind.clone(),
                outcome: VoiceOutcome::Failed,
            });
            continue;
        };
        commands.spawn((
            NarrationAudio {
                kind: request.kind.clone(),
            },
            AudioPlayer(handle),
            PlaybackSettings {
                mode: PlaybackMode::Once,
                volume: Volume::Linear(cfg.audio.narration_volume.max(0.0)),
                ..default()
            },
            Name::new("narration"),
        ));
        voice.playing = Some(request.kind.clone());
        started.write(VoiceStarted {
            kind: request.kind.clone(),
        });
    }
}

/// Polls the in-flight narration for natural completion (drained sink) or a
/// failed asset load. Either way the entity is despawned, the busy flag is
/// cleared and a `VoiceFinished` goes out.
fn watch_narration(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut voice: ResMut<VoiceState>,
    mut finished: EventWriter<VoiceFinished>,
    q_narration: Query<(Entity, &NarrationAudio, &AudioPlayer, Option<&AudioSink>)>,
) {
    for (entity, narration, player, sink) in &q_narration {
        let outcome = match sink {
            Some(sink) if sink.empty() => Some(VoiceOutcome::Completed),
            Some(_) => None,
            None => match asset_server.get_load_state(player.0.id()) {
                Some(LoadState::Failed(err)) => {
                    error!(
                        target: "audio",
                        "Voice: '{}' failed to load or play: {err}",
                        narration.kind.asset_path()
                    );
                    Some(VoiceOutcome::Failed)
                }
                _ => None,
            },
        };
        if let Some(outcome) = outcome {
            commands.entity(entity).despawn();
            voice.playing = None;
            finished.write(VoiceFinished {
                kind: narration.kind.clone(),
                outcome,
            });
        }
    }
}
