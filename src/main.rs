use bevy::prelude::*;

use word_matcher::core::config::{ConfigLoadReport, GameConfig};
use word_matcher::GamePlugin;

fn main() {
    // Base config plus an optional local overlay; either may be absent, in
    // which case defaults apply. Load issues are logged once the app is up.
    let candidates = ["assets/config/game.ron", "assets/config/game.local.ron"];
    let present: Vec<&str> = candidates
        .into_iter()
        .filter(|p| std::path::Path::new(p).exists())
        .collect();
    let (cfg, used, errors) = GameConfig::load_layered(present);

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigLoadReport { used, errors })
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
}
