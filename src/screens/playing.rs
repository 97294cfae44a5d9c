use bevy::prelude::*;

use crate::app::state::Screen;
use crate::audio::voice::{PlayVoice, VoiceKind, VoiceState};
use crate::core::catalog::GameAssets;
use crate::core::components::{ScreenRoot, SpeakerFace};
use crate::core::config::GameConfig;
use crate::gameplay::rounds::{GuessJudged, GuessSubmitted, RoundStarted};
use crate::gameplay::session::{GameSession, Guess};

use super::UiFont;

// Replay-button labels, mirroring the narrator's three states.
const REPLAY_NEW: &str = "🔊 הַשְׁמֵעַ קוֹל";
const REPLAY_PLAYING: &str = "🔄 מַשְׁמִיעַ";
const REPLAY_REPEAT: &str = "🔁 הַשְׁמֵעַ עוֹד פַּעַם";

const REPLAY_BG: Color = Color::srgb(0.25, 0.55, 0.95);
const REPLAY_BG_HOVER: Color = Color::srgb(0.22, 0.48, 0.85);
const REPLAY_BG_BUSY: Color = Color::srgb(1.0, 0.65, 0.15);

const TILE_BG: Color = Color::srgba(1.0, 1.0, 1.0, 0.92);
const TILE_BORDER: Color = Color::srgb(0.75, 0.78, 0.85);
const TILE_CORRECT: Color = Color::srgb(0.56, 0.89, 0.56);
const TILE_INCORRECT: Color = Color::srgb(0.96, 0.55, 0.55);

#[derive(Component)]
struct PlayingRoot;
#[derive(Component)]
struct ScoreText;
#[derive(Component)]
struct ReplayButton;
#[derive(Component)]
struct ReplayButtonText;
#[derive(Component)]
struct TileGrid;

/// One picture button. Clicking it submits the item's name as a guess.
#[derive(Component)]
struct Tile {
    name: String,
}

/// Wobble applied to a wrongly clicked tile; removed when the flash ends.
#[derive(Component)]
struct TileShake {
    timer: Timer,
}

/// The round screen: score, narrator portrait, replay button and the grid
/// of picture tiles (rebuilt in shuffled order after each correct answer).
pub struct PlayingScreenPlugin;

impl Plugin for PlayingScreenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Playing), spawn_playing_ui)
            .add_systems(
                Update,
                (
                    handle_tile_clicks,
                    handle_replay_button,
                    apply_guess_feedback,
                    shake_tiles,
                    rebuild_grid,
                    update_score_text,
                    update_replay_button,
                )
                    .run_if(in_state(Screen::Playing)),
            )
            .add_systems(OnExit(Screen::Playing), despawn_playing_ui);
    }
}

fn spawn_playing_ui(
    mut commands: Commands,
    session: Option<Res<GameSession>>,
    assets: Option<Res<GameAssets>>,
    font: Res<UiFont>,
) {
    let score_line = session
        .as_ref()
        .map(|s| format!("{}/{}", s.score(), s.max_score()))
        .unwrap_or_default();

    let mut grid = Entity::PLACEHOLDER;
    commands
        .spawn((
            PlayingRoot,
            ScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(18.0),
                ..default()
            },
            Name::new("playing screen"),
        ))
        .with_children(|p| {
            p.spawn(Node {
                width: Val::Percent(100.0),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(20.0), Val::Px(4.0)),
                ..default()
            })
            .with_children(|header| {
                header.spawn((
                    ScoreText,
                    Text::new(score_line),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 44.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.15, 0.2, 0.45)),
                ));
                if let Some(assets) = assets.as_ref() {
                    header.spawn((
                        SpeakerFace,
                        ImageNode::new(assets.speaker_closed.clone()),
                        Node {
                            width: Val::Px(130.0),
                            height: Val::Px(130.0),
                            ..default()
                        },
                    ));
                }
                header
                    .spawn((
                        ReplayButton,
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(26.0), Val::Px(12.0)),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(REPLAY_BG),
                        BorderRadius::all(Val::Px(14.0)),
                    ))
                    .with_children(|b| {
                        b.spawn((
                            ReplayButtonText,
                            Text::new(REPLAY_NEW),
                            TextFont {
                                font: font.0.clone(),
                                font_size: 26.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
            });
            grid = p
                .spawn((
                    TileGrid,
                    Node {
                        width: Val::Percent(94.0),
                        flex_direction: FlexDirection::Row,
                        flex_wrap: FlexWrap::Wrap,
                        justify_content: JustifyContent::Center,
                        align_content: AlignContent::FlexStart,
                        column_gap: Val::Px(14.0),
                        row_gap: Val::Px(14.0),
                        ..default()
                    },
                ))
                .id();
        });

    if let (Some(session), Some(assets)) = (session, assets) {
        let names = session.shuffled_remaining(&mut rand::thread_rng());
        spawn_tiles(&mut commands, grid, &names, &assets);
    }
}

fn spawn_tiles(commands: &mut Commands, grid: Entity, names: &[String], assets: &GameAssets) {
    for name in names {
        let Some(picture) = assets.pictures.get(name) else {
            warn!(target: "screens", "Tile: no picture registered for '{name}'");
            continue;
        };
        let tile = commands
            .spawn((
                Tile { name: name.clone() },
                Button,
                Node {
                    width: Val::Px(150.0),
                    height: Val::Px(150.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(TILE_BG),
                BorderColor(TILE_BORDER),
                BorderRadius::all(Val::Px(18.0)),
                Name::new(format!("tile:{name}")),
            ))
            .with_children(|t| {
                t.spawn((
                    ImageNode::new(picture.clone()),
                    Node {
                        width: Val::Px(126.0),
                        height: Val::Px(126.0),
                        ..default()
                    },
                ));
            })
            .id();
        commands.entity(grid).add_child(tile);
    }
}

/// New round: throw the old tiles away and lay the remaining ones out in a
/// fresh random order.
fn rebuild_grid(
    mut commands: Commands,
    mut rounds: EventReader<RoundStarted>,
    q_grid: Query<Entity, With<TileGrid>>,
    q_tiles: Query<Entity, With<Tile>>,
    session: Option<Res<GameSession>>,
    assets: Option<Res<GameAssets>>,
) {
    if rounds.is_empty() {
        return;
    }
    rounds.clear();
    let (Ok(grid), Some(session), Some(assets)) = (q_grid.single(), session, assets) else {
        return;
    };
    for tile in &q_tiles {
        commands.entity(tile).despawn();
    }
    let names = session.shuffled_remaining(&mut rand::thread_rng());
    spawn_tiles(&mut commands, grid, &names, &assets);
}

fn handle_tile_clicks(
    q_tiles: Query<(&Interaction, &Tile), Changed<Interaction>>,
    mut submitted: EventWriter<GuessSubmitted>,
) {
    for (interaction, tile) in &q_tiles {
        if *interaction == Interaction::Pressed {
            submitted.write(GuessSubmitted {
                name: tile.name.clone(),
            });
        }
    }
}

fn handle_replay_button(
    mut q_button: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ReplayButton>),
    >,
    session: Option<Res<GameSession>>,
    voice: Res<VoiceState>,
    mut play: EventWriter<PlayVoice>,
) {
    let Some(session) = session else {
        return;
    };
    for (interaction, mut bg) in q_button.iter_mut() {
        if voice.is_busy() {
            continue;
        }
        match *interaction {
            Interaction::Pressed => {
                if let Some(target) = session.target() {
                    play.write(PlayVoice {
                        kind: VoiceKind::Object(target.to_string()),
                    });
                }
            }
            Interaction::Hovered => *bg = BackgroundColor(REPLAY_BG_HOVER),
            Interaction::None => *bg = BackgroundColor(REPLAY_BG),
        }
    }
}

/// Highlight the judged tile: green until the grid rebuild for a correct
/// answer, red plus a wobble for a wrong one.
fn apply_guess_feedback(
    mut commands: Commands,
    mut judged: EventReader<GuessJudged>,
    mut q_tiles: Query<(Entity, &Tile, &mut BackgroundColor)>,
    cfg: Res<GameConfig>,
) {
    for event in judged.read() {
        for (entity, tile, mut bg) in q_tiles.iter_mut() {
            if tile.name != event.name {
                continue;
            }
            match event.verdict {
                Guess::Correct { .. } => *bg = BackgroundColor(TILE_CORRECT),
                Guess::Incorrect => {
                    *bg = BackgroundColor(TILE_INCORRECT);
                    commands.entity(entity).insert(TileShake {
                        timer: Timer::from_seconds(
                            cfg.round.incorrect_flash.max(0.0),
                            TimerMode::Once,
                        ),
                    });
                }
                Guess::Ignored => {}
            }
        }
    }
}

fn shake_tiles(
    mut commands: Commands,
    time: Res<Time>,
    mut q_shaking: Query<(Entity, &mut TileShake, &mut Node, &mut BackgroundColor)>,
) {
    for (entity, mut shake, mut node, mut bg) in q_shaking.iter_mut() {
        shake.timer.tick(time.delta());
        if shake.timer.finished() {
            node.left = Val::Auto;
            *bg = BackgroundColor(TILE_BG);
            commands.entity(entity).remove::<TileShake>();
        } else {
            // three full wobbles across the flash window
            let t = shake.timer.fraction();
            node.left = Val::Px((t * std::f32::consts::TAU * 3.0).sin() * 8.0);
        }
    }
}

fn update_score_text(
    session: Option<Res<GameSession>>,
    mut q_text: Query<&mut Text, With<ScoreText>>,
) {
    let (Some(session), Ok(mut text)) = (session, q_text.single_mut()) else {
        return;
    };
    let line = format!("{}/{}", session.score(), session.max_score());
    if text.as_str() != line {
        *text = Text::new(line);
    }
}

fn update_replay_button(
    voice: Res<VoiceState>,
    session: Option<Res<GameSession>>,
    mut q_text: Query<&mut Text, With<ReplayButtonText>>,
    mut q_bg: Query<&mut BackgroundColor, With<ReplayButton>>,
) {
    let (Some(session), Ok(mut text)) = (session, q_text.single_mut()) else {
        return;
    };
    let label = if voice.is_busy() {
        REPLAY_PLAYING
    } else if session.heard() {
        REPLAY_REPEAT
    } else {
        REPLAY_NEW
    };
    if text.as_str() != label {
        *text = Text::new(label);
        if let Ok(mut bg) = q_bg.single_mut() {
            *bg = BackgroundColor(if voice.is_busy() {
                REPLAY_BG_BUSY
            } else {
                REPLAY_BG
            });
        }
    }
}

fn despawn_playing_ui(mut commands: Commands, q_root: Query<Entity, With<PlayingRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
