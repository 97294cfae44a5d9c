use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Number of catalog objects a manifest must carry (victory score = 10 per item).
pub const CATALOG_SIZE: usize = 20;

/// Fixed assets shared by every catalog (paths relative to the assets root).
pub const INTRO_AUDIO: &str = "audio/intro.ogg";
pub const CORRECT_AUDIO: &str = "audio/correct.ogg";
pub const INCORRECT_AUDIO: &str = "audio/oops.ogg";
pub const SPEAKER_CLOSED_IMAGE: &str = "images/speaker_closed.png";
pub const SPEAKER_OPEN_IMAGE: &str = "images/speaker_open.png";

/// On-disk catalog manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogFile {
    pub version: u32,
    pub items: Vec<String>,
}

impl CatalogFile {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let txt = fs::read_to_string(&path)
            .map_err(|e| format!("read catalog {:?}: {e}", path.as_ref()))?;
        Self::parse(&txt)
    }

    pub fn parse(txt: &str) -> Result<Self, String> {
        let file: CatalogFile =
            ron::from_str(txt).map_err(|e| format!("parse catalog RON: {e}"))?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<(), String> {
        if self.version != 1 {
            return Err(format!(
                "catalog version {} unsupported (expected 1)",
                self.version
            ));
        }
        if self.items.len() != CATALOG_SIZE {
            return Err(format!(
                "catalog has {} items (expected {CATALOG_SIZE})",
                self.items.len()
            ));
        }
        for (i, name) in self.items.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(format!("catalog item {i} is empty"));
            }
            if self.items[..i].iter().any(|other| other == name) {
                return Err(format!("catalog item '{name}' appears more than once"));
            }
        }
        Ok(())
    }
}

/// The fixed ordered set of nameable objects, immutable for the process
/// lifetime. Asset paths are derived from the item name by convention.
#[derive(Debug, Resource, Clone)]
pub struct Catalog {
    items: Vec<String>,
}

impl Catalog {
    /// Default manifest compiled into the binary; used whenever no valid
    /// catalog file is found on disk.
    pub fn embedded_default() -> Self {
        const DEFAULT_CATALOG_RON: &str = include_str!("../../../assets/catalog/objects.ron");
        let file = CatalogFile::parse(DEFAULT_CATALOG_RON).expect("embedded catalog invalid");
        Self { items: file.items }
    }

    pub fn from_file(file: CatalogFile) -> Self {
        Self { items: file.items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }

    /// Score awarded when every item has been guessed (10 points apiece).
    pub fn max_score(&self) -> u32 {
        self.items.len() as u32 * 10
    }

    pub fn audio_path(name: &str) -> String {
        format!("audio/{name}.ogg")
    }

    pub fn image_path(name: &str) -> String {
        format!("images/{name}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_is_complete() {
        let catalog = Catalog::embedded_default();
        assert_eq!(catalog.len(), CATALOG_SIZE);
        assert_eq!(catalog.max_score(), 200);
    }

    #[test]
    fn rejects_duplicate_items() {
        let mut items: Vec<String> = (0..CATALOG_SIZE - 1).map(|i| format!("item{i}")).collect();
        items.push("item0".into());
        let file = CatalogFile { version: 1, items };
        assert!(file.validate().is_err());
    }

    #[test]
    fn rejects_wrong_version() {
        let items: Vec<String> = (0..CATALOG_SIZE).map(|i| format!("item{i}")).collect();
        let file = CatalogFile { version: 2, items };
        assert!(file.validate().is_err());
    }

    #[test]
    fn derived_paths_follow_convention() {
        assert_eq!(Catalog::audio_path("SOL"), "audio/SOL.ogg");
        assert_eq!(Catalog::image_path("Globo Azul"), "images/Globo Azul.png");
    }
}
