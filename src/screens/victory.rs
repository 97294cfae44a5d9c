use bevy::prelude::*;

use crate::app::state::Screen;
use crate::core::components::ScreenRoot;
use crate::gameplay::session::GameSession;

use super::transition::ScreenChange;
use super::UiFont;

const HEADING: &str = "🏆 כָּל הַכָּבוֹד! 🏆";
const PLAY_AGAIN_LABEL: &str = "🔄 לְשַׂחֵק שׁוּב";

const PLAY_AGAIN_BG: Color = Color::srgb(0.30, 0.69, 0.31);
const PLAY_AGAIN_BG_HOVER: Color = Color::srgb(0.27, 0.63, 0.28);

#[derive(Component)]
struct VictoryRoot;
#[derive(Component)]
struct PlayAgainButton;

/// Final screen: congratulation banner, the finished score and a button
/// back to the start screen. The confetti shower is driven elsewhere and
/// keeps falling over this UI.
pub struct VictoryScreenPlugin;

impl Plugin for VictoryScreenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Victory), spawn_victory_ui)
            .add_systems(
                Update,
                handle_play_again_button.run_if(in_state(Screen::Victory)),
            )
            .add_systems(OnExit(Screen::Victory), despawn_victory_ui);
    }
}

fn spawn_victory_ui(
    mut commands: Commands,
    session: Option<Res<GameSession>>,
    font: Res<UiFont>,
) {
    let score_line = session
        .map(|s| format!("{}/{}", s.score(), s.max_score()))
        .unwrap_or_default();

    commands
        .spawn((
            VictoryRoot,
            ScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(30.0),
                ..default()
            },
            Name::new("victory screen"),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new(HEADING),
                TextFont {
                    font: font.0.clone(),
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.75, 0.1)),
            ));
            p.spawn((
                Text::new(score_line),
                TextFont {
                    font: font.0.clone(),
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.15, 0.2, 0.45)),
            ));
            p.spawn((
                PlayAgainButton,
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(36.0), Val::Px(16.0)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(PLAY_AGAIN_BG),
                BorderRadius::all(Val::Px(16.0)),
            ))
            .with_children(|b| {
                b.spawn((
                    Text::new(PLAY_AGAIN_LABEL),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 32.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        });
}

fn handle_play_again_button(
    mut q_button: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<PlayAgainButton>),
    >,
    mut changes: EventWriter<ScreenChange>,
) {
    for (interaction, mut bg) in q_button.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                changes.write(ScreenChange { to: Screen::Start });
            }
            Interaction::Hovered => *bg = BackgroundColor(PLAY_AGAIN_BG_HOVER),
            Interaction::None => *bg = BackgroundColor(PLAY_AGAIN_BG),
        }
    }
}

fn despawn_victory_ui(mut commands: Commands, q_root: Query<Entity, With<VictoryRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
