#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::audio::voice::VoiceState;
#[cfg(feature = "debug")]
use crate::gameplay::session::GameSession;

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 2.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub score: u32,
    pub remaining: usize,
    pub target: Option<String>,
    pub narration_busy: bool,
    pub ui_nodes: usize,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    session: Option<Res<GameSession>>,
    voice: Option<Res<VoiceState>>,
    q_nodes: Query<(), With<Node>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    if let Some(session) = session {
        stats.score = session.score();
        stats.remaining = session.remaining().len();
        stats.target = session.target().map(str::to_owned);
    }
    stats.narration_busy = voice.map(|v| v.is_busy()).unwrap_or(false);
    stats.ui_nodes = q_nodes.iter().count();
}
