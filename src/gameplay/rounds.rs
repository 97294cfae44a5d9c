use bevy::prelude::*;

use crate::app::state::Screen;
use crate::audio::voice::{VoiceFinished, VoiceKind, VoiceOutcome, VoiceState};
use crate::core::catalog::Catalog;
use crate::core::config::GameConfig;
use crate::screens::transition::ScreenChange;

use super::session::{GameSession, Guess};

/// A tile was clicked.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct GuessSubmitted {
    pub name: String,
}

/// Verdict for a submitted guess. Only correct/incorrect verdicts are
/// published; a click that arrives while narration is busy (or with no
/// round active) simply evaporates.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct GuessJudged {
    pub name: String,
    pub verdict: Guess,
}

/// A new target was picked and the tile grid should be rebuilt.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct RoundStarted {
    pub target: String,
}

/// Pause between a correct answer and the next round (or the victory
/// screen), so the player sees the highlight and hears the jingle.
#[derive(Resource, Deref, DerefMut)]
struct AdvanceTimer(Timer);

/// Drives the guess-a-word loop: waits out the intro, judges clicks,
/// advances rounds and raises the victory transition.
pub struct RoundsPlugin;

impl Plugin for RoundsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GuessSubmitted>()
            .add_event::<GuessJudged>()
            .add_event::<RoundStarted>()
            .add_systems(OnEnter(Screen::Start), reset_session)
            .add_systems(Update, await_intro.run_if(in_state(Screen::Start)))
            .add_systems(
                Update,
                (judge_guesses, advance_after_delay, mark_heard)
                    .chain()
                    .run_if(in_state(Screen::Playing)),
            )
            .add_systems(OnExit(Screen::Playing), cleanup_round);
    }
}

/// Fresh session with the full catalog. Runs on first boot and again every
/// time the player returns to the start screen.
fn reset_session(mut commands: Commands, catalog: Option<Res<Catalog>>) {
    let Some(catalog) = catalog else {
        warn!(target: "rounds", "Round: catalog missing; session not created");
        return;
    };
    commands.insert_resource(GameSession::new(&catalog));
}

/// Start -> Playing once the intro narration has actually finished. A failed
/// intro leaves the start screen as it was so the player can press again.
fn await_intro(
    mut finished: EventReader<VoiceFinished>,
    mut session: Option<ResMut<GameSession>>,
    mut change: EventWriter<ScreenChange>,
) {
    for event in finished.read() {
        if event.kind != VoiceKind::Intro || event.outcome != VoiceOutcome::Completed {
            continue;
        }
        let Some(session) = session.as_mut() else {
            return;
        };
        if let Some(target) = session.start_round(&mut rand::thread_rng()) {
            info!(target: "rounds", "Round: first target '{target}'");
            change.write(ScreenChange {
                to: Screen::Playing,
            });
        }
        return;
    }
}

fn judge_guesses(
    mut commands: Commands,
    mut submitted: EventReader<GuessSubmitted>,
    mut judged: EventWriter<GuessJudged>,
    session: Option<ResMut<GameSession>>,
    voice: Res<VoiceState>,
    cfg: Res<GameConfig>,
) {
    let Some(mut session) = session else {
        return;
    };
    for event in submitted.read() {
        let verdict = session.submit_guess(&event.name, voice.is_busy());
        match verdict {
            Guess::Correct { finished } => {
                info!(
                    target: "rounds",
                    "Round: '{}' correct, score {}/{}{}",
                    event.name,
                    session.score(),
                    session.max_score(),
                    if finished { " (catalog cleared)" } else { "" }
                );
                commands.insert_resource(AdvanceTimer(Timer::from_seconds(
                    cfg.round.advance_delay.max(0.0),
                    TimerMode::Once,
                )));
            }
            Guess::Incorrect => {
                debug!(target: "rounds", "Round: '{}' incorrect", event.name);
            }
            Guess::Ignored => continue,
        }
        judged.write(GuessJudged {
            name: event.name.clone(),
            verdict,
        });
    }
}

/// Fires once per correct answer: either the next round begins (new target,
/// reshuffled grid) or, with the catalog cleared, the victory screen shows.
fn advance_after_delay(
    mut commands: Commands,
    time: Res<Time>,
    timer: Option<ResMut<AdvanceTimer>>,
    session: Option<ResMut<GameSession>>,
    mut rounds: EventWriter<RoundStarted>,
    mut change: EventWriter<ScreenChange>,
) {
    let (Some(mut timer), Some(mut session)) = (timer, session) else {
        return;
    };
    timer.tick(time.delta());
    if !timer.finished() {
        return;
    }
    commands.remove_resource::<AdvanceTimer>();
    if session.finished() {
        info!(
            target: "rounds",
            "Round: all words found, final score {}",
            session.score()
        );
        change.write(ScreenChange {
            to: Screen::Victory,
        });
    } else if let Some(target) = session.start_round(&mut rand::thread_rng()) {
        debug!(target: "rounds", "Round: next target '{target}'");
        rounds.write(RoundStarted {
            target: target.to_string(),
        });
    }
}

/// Remember that the player has heard the current word at least once; the
/// replay button swaps its label from "play" to "play again" off this.
fn mark_heard(mut finished: EventReader<VoiceFinished>, session: Option<ResMut<GameSession>>) {
    let Some(mut session) = session else {
        return;
    };
    for event in finished.read() {
        if let (VoiceKind::Object(name), VoiceOutcome::Completed) = (&event.kind, event.outcome) {
            session.mark_heard(name);
        }
    }
}

fn cleanup_round(mut commands: Commands) {
    commands.remove_resource::<AdvanceTimer>();
}
