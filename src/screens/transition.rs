use bevy::prelude::*;

use crate::app::state::Screen;
use crate::core::components::ScreenRoot;
use crate::core::config::GameConfig;

/// Request to move to another screen. The current screen's UI is hidden
/// immediately; the state switch itself happens after `screens.fade_delay`
/// so the swap reads as a brief fade instead of a hard cut.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChange {
    pub to: Screen,
}

/// In-flight transition. Present only between the request and the switch.
#[derive(Resource)]
struct PendingScreen {
    to: Screen,
    timer: Timer,
}

pub struct ScreenTransitionPlugin;

impl Plugin for ScreenTransitionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ScreenChange>()
            .add_systems(Update, (begin_screen_change, apply_screen_change).chain());
    }
}

fn begin_screen_change(
    mut commands: Commands,
    mut events: EventReader<ScreenChange>,
    cfg: Res<GameConfig>,
    state: Res<State<Screen>>,
    mut q_roots: Query<&mut Visibility, With<ScreenRoot>>,
) {
    let Some(change) = events.read().last().copied() else {
        return;
    };
    if change.to == *state.get() {
        return;
    }
    info!(target: "screens", "Screen: {:?} -> {:?}", state.get(), change.to);
    for mut vis in q_roots.iter_mut() {
        *vis = Visibility::Hidden;
    }
    let delay = cfg.screens.fade_delay.max(0.0);
    commands.insert_resource(PendingScreen {
        to: change.to,
        timer: Timer::from_seconds(delay, TimerMode::Once),
    });
}

fn apply_screen_change(
    mut commands: Commands,
    time: Res<Time>,
    pending: Option<ResMut<PendingScreen>>,
    mut next: ResMut<NextState<Screen>>,
) {
    let Some(mut pending) = pending else {
        return;
    };
    pending.timer.tick(time.delta());
    if pending.timer.finished() {
        next.set(pending.to);
        commands.remove_resource::<PendingScreen>();
    }
}
