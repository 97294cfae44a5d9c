use bevy::prelude::*;

/// Marker on the root UI node of each screen; the transition plugin hides
/// these while a screen change is pending.
#[derive(Component)]
pub struct ScreenRoot;

/// Marker on the narrator portrait image; the speaker plugin swaps its
/// frames while narration is playing.
#[derive(Component)]
pub struct SpeakerFace;
