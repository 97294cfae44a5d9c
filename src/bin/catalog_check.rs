//! Catalog asset checker.
//!
//! Validates a catalog manifest and verifies that every asset the game will
//! request for it exists under the assets directory: one narration clip and
//! one picture per item, plus the fixed intro/feedback clips and the two
//! speaker frames.
//!
//! Example:
//!   cargo run --bin catalog_check -- \
//!     --catalog assets/catalog/objects.ron \
//!     --assets-dir assets

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use word_matcher::core::catalog::manifest::{
    CORRECT_AUDIO, INCORRECT_AUDIO, INTRO_AUDIO, SPEAKER_CLOSED_IMAGE, SPEAKER_OPEN_IMAGE,
};
use word_matcher::core::catalog::{Catalog, CatalogFile};

#[derive(Parser, Debug)]
#[command(author, version, about = "Check a catalog manifest against the assets directory", long_about = None)]
struct Args {
    #[arg(long, default_value = "assets/catalog/objects.ron")]
    catalog: PathBuf,
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,
}

/// Asset paths (relative to `assets_dir`) the given catalog needs but which
/// are not present on disk.
fn missing_assets(catalog: &Catalog, assets_dir: &Path) -> Vec<String> {
    let mut missing = Vec::new();
    let mut check = |rel: String| {
        if !assets_dir.join(&rel).is_file() {
            missing.push(rel);
        }
    };
    for fixed in [
        INTRO_AUDIO,
        CORRECT_AUDIO,
        INCORRECT_AUDIO,
        SPEAKER_CLOSED_IMAGE,
        SPEAKER_OPEN_IMAGE,
    ] {
        check(fixed.to_string());
    }
    for name in catalog.items() {
        check(Catalog::audio_path(name));
        check(Catalog::image_path(name));
    }
    missing
}

fn main() -> Result<()> {
    let args = Args::parse();
    let file = CatalogFile::load_from_file(&args.catalog).map_err(anyhow::Error::msg)?;
    let catalog = Catalog::from_file(file);
    println!(
        "catalog {:?}: {} items, max score {}",
        args.catalog,
        catalog.len(),
        catalog.max_score()
    );

    let missing = missing_assets(&catalog, &args.assets_dir);
    if missing.is_empty() {
        println!(
            "all {} assets present under {:?}",
            catalog.len() * 2 + 5,
            args.assets_dir
        );
        return Ok(());
    }
    for rel in &missing {
        eprintln!("missing: {}", args.assets_dir.join(rel).display());
    }
    anyhow::bail!("{} asset(s) missing", missing.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tiny_catalog(items: &[&str]) -> Catalog {
        Catalog::from_file(CatalogFile {
            version: 1,
            items: items.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn finds_every_missing_asset() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = tiny_catalog(&["SOL", "LUNA"]);
        let missing = missing_assets(&catalog, tmp.path());
        // 5 fixed assets + audio/picture per item
        assert_eq!(missing.len(), 9);
        assert!(missing.contains(&"audio/SOL.ogg".to_string()));
        assert!(missing.contains(&"images/LUNA.png".to_string()));
        assert!(missing.contains(&INTRO_AUDIO.to_string()));
    }

    #[test]
    fn passes_when_assets_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let assets = tmp.path();
        fs::create_dir_all(assets.join("audio")).unwrap();
        fs::create_dir_all(assets.join("images")).unwrap();
        let catalog = tiny_catalog(&["SOL"]);
        for rel in [
            INTRO_AUDIO,
            CORRECT_AUDIO,
            INCORRECT_AUDIO,
            SPEAKER_CLOSED_IMAGE,
            SPEAKER_OPEN_IMAGE,
        ] {
            fs::write(assets.join(rel), b"x").unwrap();
        }
        fs::write(assets.join(Catalog::audio_path("SOL")), b"x").unwrap();
        fs::write(assets.join(Catalog::image_path("SOL")), b"x").unwrap();
        assert!(missing_assets(&catalog, assets).is_empty());
    }
}
