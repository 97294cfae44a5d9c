use bevy::prelude::*;

use crate::app::auto_close::AutoClosePlugin;
use crate::app::state::Screen;
use crate::audio::feedback::FeedbackPlugin;
use crate::audio::speaker::SpeakerPlugin;
use crate::audio::voice::VoicePlugin;
use crate::core::catalog::CatalogPlugin;
use crate::core::config::{ConfigLoadReport, GameConfig};
use crate::debug::DebugPlugin;
use crate::gameplay::celebration::CelebrationPlugin;
use crate::gameplay::rounds::RoundsPlugin;
use crate::screens::ScreensPlugin;

/// Sky tone the window clears to; screen fades read as a blink of this.
const CLEAR_COLOR: Color = Color::srgb(0.61, 0.81, 0.94);

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .insert_resource(ClearColor(CLEAR_COLOR))
            .add_plugins((
                CatalogPlugin,
                VoicePlugin,
                SpeakerPlugin,
                FeedbackPlugin,
                RoundsPlugin,
                CelebrationPlugin,
                ScreensPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ))
            .add_systems(Startup, (setup_camera, report_config));
    }
}

fn setup_camera(mut commands: Commands) {
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    commands.spawn(Camera2d);
}

/// Config is read before the app (and its logger) exists, so the load
/// outcome is replayed here, followed by the sanity warnings.
fn report_config(cfg: Res<GameConfig>, report: Option<Res<ConfigLoadReport>>) {
    if let Some(report) = report.as_ref() {
        for path in &report.used {
            info!(target: "config", "Config: loaded '{path}'");
        }
        for err in &report.errors {
            warn!(target: "config", "Config: {err}");
        }
    }
    for warning in cfg.validate() {
        warn!(target: "config", "Config: {warning}");
    }
}
