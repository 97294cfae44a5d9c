//! Per-screen UI trees and the fade-style transition between them.

pub mod playing;
pub mod start;
pub mod transition;
pub mod victory;

pub use playing::PlayingScreenPlugin;
pub use start::StartScreenPlugin;
pub use transition::{ScreenChange, ScreenTransitionPlugin};
pub use victory::VictoryScreenPlugin;

use bevy::prelude::*;

/// Font every screen's text uses. Falls back to the built-in default when
/// the bundled TTF is absent (Hebrew niqqud then renders as boxes).
#[derive(Resource)]
pub struct UiFont(pub Handle<Font>);

pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_ui_font).add_plugins((
            ScreenTransitionPlugin,
            StartScreenPlugin,
            PlayingScreenPlugin,
            VictoryScreenPlugin,
        ));
    }
}

fn load_ui_font(mut commands: Commands, asset_server: Res<AssetServer>) {
    let font_path = "fonts/FiraSans-Bold.ttf";
    let disk_path = format!("assets/{font_path}");
    let handle = if std::path::Path::new(&disk_path).exists() {
        asset_server.load(font_path)
    } else {
        warn!(target: "screens", "UI font missing at {disk_path}; using the default font");
        Handle::default()
    };
    commands.insert_resource(UiFont(handle));
}
