use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::app::state::Screen;
use crate::core::config::GameConfig;
use crate::gameplay::session::Guess;

use super::rounds::GuessJudged;

const CONFETTI_COLORS: [Color; 6] = [
    Color::srgb(1.0, 0.84, 0.25),
    Color::srgb(0.95, 0.35, 0.35),
    Color::srgb(0.35, 0.78, 0.95),
    Color::srgb(0.45, 0.88, 0.45),
    Color::srgb(0.85, 0.45, 0.9),
    Color::srgb(1.0, 0.6, 0.2),
];

/// Spawn one shower of falling confetti squares.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationBurst {
    pub count: u32,
}

/// One falling square. Not parented to any screen root, so a piece keeps
/// falling through a screen transition until its timer runs out.
#[derive(Component)]
struct ConfettiPiece {
    fall: Timer,
    fall_px: f32,
}

/// Repeating burst schedule while the victory screen is up.
#[derive(Resource)]
struct VictoryCelebration {
    remaining: u32,
    timer: Timer,
}

pub struct CelebrationPlugin;

impl Plugin for CelebrationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CelebrationBurst>()
            .add_systems(
                Update,
                (
                    burst_on_correct,
                    run_victory_celebration,
                    spawn_confetti,
                    animate_confetti,
                ),
            )
            .add_systems(OnEnter(Screen::Victory), start_victory_celebration)
            .add_systems(OnExit(Screen::Victory), stop_victory_celebration);
    }
}

fn burst_on_correct(
    mut judged: EventReader<GuessJudged>,
    mut bursts: EventWriter<CelebrationBurst>,
    cfg: Res<GameConfig>,
) {
    for event in judged.read() {
        if matches!(event.verdict, Guess::Correct { .. }) && cfg.celebration.burst_size > 0 {
            bursts.write(CelebrationBurst {
                count: cfg.celebration.burst_size,
            });
        }
    }
}

fn start_victory_celebration(mut commands: Commands, cfg: Res<GameConfig>) {
    let c = &cfg.celebration;
    if c.victory_bursts > 0 && c.burst_interval > 0.0 {
        commands.insert_resource(VictoryCelebration {
            remaining: c.victory_bursts,
            timer: Timer::from_seconds(c.burst_interval, TimerMode::Repeating),
        });
    }
}

fn stop_victory_celebration(mut commands: Commands) {
    commands.remove_resource::<VictoryCelebration>();
}

fn run_victory_celebration(
    mut commands: Commands,
    time: Res<Time>,
    celebration: Option<ResMut<VictoryCelebration>>,
    mut bursts: EventWriter<CelebrationBurst>,
    cfg: Res<GameConfig>,
) {
    let Some(mut celebration) = celebration else {
        return;
    };
    celebration.timer.tick(time.delta());
    if celebration.timer.just_finished() && cfg.celebration.burst_size > 0 {
        bursts.write(CelebrationBurst {
            count: cfg.celebration.burst_size,
        });
        celebration.remaining = celebration.remaining.saturating_sub(1);
        if celebration.remaining == 0 {
            commands.remove_resource::<VictoryCelebration>();
        }
    }
}

fn spawn_confetti(
    mut commands: Commands,
    mut bursts: EventReader<CelebrationBurst>,
    cfg: Res<GameConfig>,
) {
    let mut rng = rand::thread_rng();
    for burst in bursts.read() {
        for _ in 0..burst.count {
            let size = rng.gen_range(10.0..22.0);
            let color = CONFETTI_COLORS
                .choose(&mut rng)
                .copied()
                .unwrap_or(Color::WHITE);
            commands.spawn((
                ConfettiPiece {
                    fall: Timer::from_seconds(cfg.celebration.fall_duration, TimerMode::Once),
                    fall_px: (cfg.window.height + 80.0) * rng.gen_range(0.8..1.25),
                },
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Percent(rng.gen_range(0.0..100.0)),
                    top: Val::Px(-40.0),
                    width: Val::Px(size),
                    height: Val::Px(size),
                    ..default()
                },
                BackgroundColor(color),
                GlobalZIndex(100),
                Name::new("confetti"),
            ));
        }
    }
}

fn animate_confetti(
    mut commands: Commands,
    time: Res<Time>,
    mut q_pieces: Query<(Entity, &mut ConfettiPiece, &mut Node)>,
) {
    for (entity, mut piece, mut node) in q_pieces.iter_mut() {
        piece.fall.tick(time.delta());
        if piece.fall.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        node.top = Val::Px(-40.0 + piece.fall.fraction() * piece.fall_px);
    }
}
