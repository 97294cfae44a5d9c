use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Word Matcher".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub narration_volume: f32,
    pub feedback_volume: f32,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            narration_volume: 1.0,
            feedback_volume: 0.8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RoundConfig {
    /// Seconds between a correct answer and the grid rebuild / victory check.
    pub advance_delay: f32,
    /// Seconds a wrongly clicked tile stays highlighted.
    pub incorrect_flash: f32,
}
impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            advance_delay: 0.8,
            incorrect_flash: 0.6,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpeakerConfig {
    /// Seconds between mouth-frame swaps while narration is playing.
    pub frame_interval: f32,
}
impl Default for SpeakerConfig {
    fn default() -> Self {
        Self {
            frame_interval: 0.3,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScreenConfig {
    /// Seconds the old screen stays hidden before the next state is entered.
    pub fade_delay: f32,
}
impl Default for ScreenConfig {
    fn default() -> Self {
        Self { fade_delay: 0.1 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CelebrationConfig {
    pub burst_size: u32,
    /// Seconds a confetti piece falls before despawning.
    pub fall_duration: f32,
    pub victory_bursts: u32,
    pub burst_interval: f32,
}
impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            burst_size: 10,
            fall_duration: 3.0,
            victory_bursts: 30,
            burst_interval: 0.2,
        }
    }
}

/// What `load_layered` found on disk. The binary stashes this so the
/// outcome can be logged once the app's logger is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub audio: AudioConfig,
    pub round: RoundConfig,
    pub speaker: SpeakerConfig,
    pub screens: ScreenConfig,
    pub celebration: CelebrationConfig,
    pub default_catalog_path: String,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            audio: Default::default(),
            round: Default::default(),
            speaker: Default::default(),
            screens: Default::default(),
            celebration: Default::default(),
            default_catalog_path: "assets/catalog/objects.ron".into(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge several RON files (later paths override earlier ones key-by-key).
    /// Returns the config, the paths that contributed, and any per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.clone().into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GameConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        fn check_volume(w: &mut Vec<String>, label: &str, v: f32) {
            if v < 0.0 {
                w.push(format!("{label} {v} negative; clamped to silence"));
            } else if v > 2.0 {
                w.push(format!("{label} {v} very loud (typical range 0..2)"));
            }
        }
        check_volume(&mut w, "audio.narration_volume", self.audio.narration_volume);
        check_volume(&mut w, "audio.feedback_volume", self.audio.feedback_volume);
        if self.round.advance_delay < 0.0 {
            w.push("round.advance_delay negative -> treated as immediate".into());
        }
        if self.round.advance_delay > 5.0 {
            w.push(format!(
                "round.advance_delay {} very long; game will feel stalled",
                self.round.advance_delay
            ));
        }
        if self.round.incorrect_flash < 0.0 {
            w.push("round.incorrect_flash negative -> treated as no flash".into());
        }
        if self.speaker.frame_interval <= 0.0 {
            w.push(format!(
                "speaker.frame_interval {} must be > 0; mouth animation disabled",
                self.speaker.frame_interval
            ));
        }
        if self.screens.fade_delay < 0.0 {
            w.push("screens.fade_delay negative -> treated as immediate".into());
        } else if self.screens.fade_delay > 1.0 {
            w.push(format!(
                "screens.fade_delay {} long; both screens stay hidden meanwhile",
                self.screens.fade_delay
            ));
        }
        if self.celebration.burst_size == 0 {
            w.push("celebration.burst_size is 0; correct answers show no confetti".into());
        }
        if self.celebration.burst_size > 500 {
            w.push(format!(
                "celebration.burst_size {} very high; UI node spam",
                self.celebration.burst_size
            ));
        }
        if self.celebration.fall_duration <= 0.0 {
            w.push("celebration.fall_duration must be > 0".into());
        }
        if self.celebration.victory_bursts > 0 && self.celebration.burst_interval <= 0.0 {
            w.push("celebration.burst_interval must be > 0 when victory_bursts > 0".into());
        }
        if self.default_catalog_path.trim().is_empty() {
            w.push("default_catalog_path empty; embedded catalog will be used".into());
        }
        w
    }
}
