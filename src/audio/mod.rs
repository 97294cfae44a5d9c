//! Narration, feedback jingles and the talking-head animation.

pub mod feedback;
pub mod speaker;
pub mod voice;

pub use feedback::FeedbackPlugin;
pub use speaker::SpeakerPlugin;
pub use voice::{
    PlayVoice, VoiceFinished, VoiceKind, VoiceOutcome, VoicePlugin, VoiceStarted, VoiceState,
};
