pub mod config;

pub use config::{
    AudioConfig, CelebrationConfig, ConfigLoadReport, GameConfig, RoundConfig, ScreenConfig,
    SpeakerConfig, WindowConfig,
};
