#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use super::stats::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::app::state::Screen;

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    screen: Res<State<Screen>>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "GAME frame={} t={:.3}s fps={:.1} ft_ms={:.1} screen={:?} score={} remaining={} target={:?} busy={} nodes={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            screen.get(),
            stats.score,
            stats.remaining,
            stats.target,
            stats.narration_busy,
            stats.ui_nodes
        );
    }
}
