use bevy::prelude::*;

use crate::app::state::Screen;
use crate::audio::voice::{PlayVoice, VoiceKind, VoiceState};
use crate::core::catalog::GameAssets;
use crate::core::components::{ScreenRoot, SpeakerFace};

use super::UiFont;

const TITLE: &str = "מִשְׂחָק הַמִּלִּים";
const SUBTITLE: &str = "¡Aprende palabras en hebreo!";
const START_LABEL: &str = "🚀 הַתְחֵל מִשְׂחָק 🚀";
const PLAYING_LABEL: &str = "🔄 מַשְׁמִיעַ";

const START_BG: Color = Color::srgb(0.30, 0.69, 0.31);
const START_BG_HOVER: Color = Color::srgb(0.27, 0.63, 0.28);
const START_BG_BUSY: Color = Color::srgb(1.0, 0.65, 0.15);

#[derive(Component)]
struct StartRoot;
#[derive(Component)]
struct StartButton;
#[derive(Component)]
struct StartButtonText;

/// Title screen: portrait, title and the start button. Pressing start plays
/// the intro narration; the round controller switches to Playing once it
/// completes (a failed intro leaves the button armed for another try).
pub struct StartScreenPlugin;

impl Plugin for StartScreenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Start), spawn_start_ui)
            .add_systems(
                Update,
                (handle_start_button, update_start_button).run_if(in_state(Screen::Start)),
            )
            .add_systems(OnExit(Screen::Start), despawn_start_ui);
    }
}

fn spawn_start_ui(mut commands: Commands, assets: Option<Res<GameAssets>>, font: Res<UiFont>) {
    commands
        .spawn((
            StartRoot,
            ScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(28.0),
                ..default()
            },
            Name::new("start screen"),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new(TITLE),
                TextFont {
                    font: font.0.clone(),
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.15, 0.2, 0.45)),
            ));
            p.spawn((
                Text::new(SUBTITLE),
                TextFont {
                    font: font.0.clone(),
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.25, 0.3, 0.5)),
            ));
            if let Some(assets) = assets.as_ref() {
                p.spawn((
                    SpeakerFace,
                    ImageNode::new(assets.speaker_closed.clone()),
                    Node {
                        width: Val::Px(220.0),
                        height: Val::Px(220.0),
                        ..default()
                    },
                ));
            }
            p.spawn((
                StartButton,
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(36.0), Val::Px(18.0)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(START_BG),
                BorderRadius::all(Val::Px(16.0)),
            ))
            .with_children(|b| {
                b.spawn((
                    StartButtonText,
                    Text::new(START_LABEL),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 34.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        });
}

/// The button is inert while any narration plays; the intro kicks off only
/// from the idle state, so double-clicks cannot stack requests.
fn handle_start_button(
    mut q_button: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<StartButton>),
    >,
    voice: Res<VoiceState>,
    mut play: EventWriter<PlayVoice>,
) {
    for (interaction, mut bg) in q_button.iter_mut() {
        if voice.is_busy() {
            continue;
        }
        match *interaction {
            Interaction::Pressed => {
                play.write(PlayVoice {
                    kind: VoiceKind::Intro,
                });
            }
            Interaction::Hovered => *bg = BackgroundColor(START_BG_HOVER),
            Interaction::None => *bg = BackgroundColor(START_BG),
        }
    }
}

fn update_start_button(
    voice: Res<VoiceState>,
    mut q_text: Query<&mut Text, With<StartButtonText>>,
    mut q_bg: Query<&mut BackgroundColor, With<StartButton>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    let label = if voice.is_busy() {
        PLAYING_LABEL
    } else {
        START_LABEL
    };
    if text.as_str() != label {
        *text = Text::new(label);
        if let Ok(mut bg) = q_bg.single_mut() {
            *bg = BackgroundColor(if voice.is_busy() {
                START_BG_BUSY
            } else {
                START_BG
            });
        }
    }
}

fn despawn_start_ui(mut commands: Commands, q_root: Query<Entity, With<StartRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
