use bevy::prelude::*;
use std::collections::HashMap;

use crate::core::config::GameConfig;

use super::manifest::{
    Catalog, CatalogFile, CORRECT_AUDIO, INCORRECT_AUDIO, INTRO_AUDIO, SPEAKER_CLOSED_IMAGE,
    SPEAKER_OPEN_IMAGE,
};

/// Pre-loaded handles for every asset the game can play or show.
#[derive(Resource)]
pub struct GameAssets {
    pub intro: Handle<AudioSource>,
    pub correct: Handle<AudioSource>,
    pub incorrect: Handle<AudioSource>,
    pub speaker_closed: Handle<Image>,
    pub speaker_open: Handle<Image>,
    pub words: HashMap<String, Handle<AudioSource>>,
    pub pictures: HashMap<String, Handle<Image>>,
}

/// Loads the catalog manifest at startup and primes all asset handles.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_catalog);
    }
}

/// Determine the catalog manifest path via (precedence):
///  1. CLI args: --catalog <path>
///  2. Env var: WORD_MATCHER_CATALOG
///  3. GameConfig.default_catalog_path
pub fn resolve_requested_catalog_path() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        if a == "--catalog" {
            if let Some(path) = args.next() {
                if !path.trim().is_empty() {
                    return Some(path);
                }
            }
        }
    }
    if let Ok(val) = std::env::var("WORD_MATCHER_CATALOG") {
        if !val.trim().is_empty() {
            return Some(val);
        }
    }
    None
}

fn load_catalog(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    let requested = resolve_requested_catalog_path();
    let path = requested
        .clone()
        .unwrap_or_else(|| cfg.default_catalog_path.clone());

    let catalog = match CatalogFile::load_from_file(&path) {
        Ok(file) => {
            info!(
                target: "catalog",
                "Catalog: loaded {} items from '{}'{}",
                file.items.len(),
                path,
                if requested.is_some() { " (requested)" } else { "" }
            );
            Catalog::from_file(file)
        }
        Err(e) => {
            warn!(
                target: "catalog",
                "Catalog: '{}' unusable ({e}); falling back to embedded default",
                path
            );
            Catalog::embedded_default()
        }
    };

    let mut words = HashMap::new();
    let mut pictures = HashMap::new();
    for name in catalog.items() {
        words.insert(
            name.clone(),
            asset_server.load::<AudioSource>(Catalog::audio_path(name)),
        );
        pictures.insert(
            name.clone(),
            asset_server.load::<Image>(Catalog::image_path(name)),
        );
    }
    commands.insert_resource(GameAssets {
        intro: asset_server.load(INTRO_AUDIO),
        correct: asset_server.load(CORRECT_AUDIO),
        incorrect: asset_server.load(INCORRECT_AUDIO),
        speaker_closed: asset_server.load(SPEAKER_CLOSED_IMAGE),
        speaker_open: asset_server.load(SPEAKER_OPEN_IMAGE),
        words,
        pictures,
    });

    info!(
        target: "catalog",
        "Catalog: ready ({} words, max score {})",
        catalog.len(),
        catalog.max_score()
    );
    commands.insert_resource(catalog);
}
