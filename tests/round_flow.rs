use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use word_matcher::app::state::Screen;
use word_matcher::audio::voice::{VoiceFinished, VoiceKind, VoiceOutcome, VoiceState};
use word_matcher::core::catalog::{Catalog, CatalogFile};
use word_matcher::core::config::GameConfig;
use word_matcher::gameplay::rounds::{GuessJudged, GuessSubmitted, RoundStarted, RoundsPlugin};
use word_matcher::gameplay::session::{GameSession, Guess};
use word_matcher::screens::transition::{ScreenChange, ScreenTransitionPlugin};

fn tiny_catalog(items: &[&str]) -> Catalog {
    Catalog::from_file(CatalogFile {
        version: 1,
        items: items.iter().map(|s| s.to_string()).collect(),
    })
}

/// Headless app running the round loop against a small catalog. Narration is
/// simulated by sending `VoiceFinished` events by hand; all delays are zeroed
/// so timers complete on their first tick.
fn test_app(items: &[&str]) -> App {
    let mut cfg = GameConfig::default();
    cfg.round.advance_delay = 0.0;
    cfg.screens.fade_delay = 0.0;
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<Screen>();
    app.insert_resource(cfg);
    app.insert_resource(tiny_catalog(items));
    app.insert_resource(VoiceState::default());
    app.add_event::<VoiceFinished>();
    app.add_plugins((ScreenTransitionPlugin, RoundsPlugin));
    // first update runs OnEnter(Start) -> session created
    app.update();
    app
}

fn finish_intro(app: &mut App) {
    app.world_mut().send_event(VoiceFinished {
        kind: VoiceKind::Intro,
        outcome: VoiceOutcome::Completed,
    });
    for _ in 0..4 {
        app.update();
    }
}

fn submit(app: &mut App, name: &str) {
    app.world_mut().send_event(GuessSubmitted {
        name: name.to_string(),
    });
}

fn current_target(app: &App) -> String {
    app.world()
        .resource::<GameSession>()
        .target()
        .expect("round target set")
        .to_string()
}

fn screen(app: &App) -> Screen {
    *app.world().resource::<State<Screen>>().get()
}

#[test]
fn intro_completion_starts_the_first_round() {
    let mut app = test_app(&["a", "b"]);
    assert_eq!(screen(&app), Screen::Start);
    assert!(app.world().resource::<GameSession>().target().is_none());
    finish_intro(&mut app);
    assert_eq!(screen(&app), Screen::Playing);
    let session = app.world().resource::<GameSession>();
    assert!(session.target().is_some());
    assert_eq!(session.score(), 0);
}

#[test]
fn failed_intro_stays_on_start() {
    let mut app = test_app(&["a", "b"]);
    app.world_mut().send_event(VoiceFinished {
        kind: VoiceKind::Intro,
        outcome: VoiceOutcome::Failed,
    });
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(screen(&app), Screen::Start);
    assert!(app.world().resource::<GameSession>().target().is_none());
}

#[test]
fn correct_guess_scores_and_starts_next_round() {
    let mut app = test_app(&["a", "b", "c"]);
    finish_intro(&mut app);
    let target = current_target(&app);
    submit(&mut app, &target);
    app.update();
    let session = app.world().resource::<GameSession>();
    assert_eq!(session.score(), 10);
    assert_eq!(session.remaining().len(), 2);
    // next round began immediately (zero advance delay)
    let next = session.target().expect("next target picked");
    assert!(session.remaining().contains(&next.to_string()));
    let judged = app.world().resource::<Events<GuessJudged>>();
    let mut cursor = judged.get_cursor();
    let verdicts: Vec<_> = cursor.read(judged).collect();
    assert_eq!(verdicts.len(), 1);
    assert!(matches!(
        verdicts[0].verdict,
        Guess::Correct { finished: false }
    ));
    let rounds = app.world().resource::<Events<RoundStarted>>();
    let mut cursor = rounds.get_cursor();
    assert_eq!(cursor.read(rounds).count(), 1);
}

#[test]
fn wrong_guess_changes_nothing_and_is_reported() {
    let mut app = test_app(&["a", "b"]);
    finish_intro(&mut app);
    let target = current_target(&app);
    let wrong = ["a", "b"]
        .iter()
        .find(|n| **n != target)
        .unwrap()
        .to_string();
    submit(&mut app, &wrong);
    app.update();
    let session = app.world().resource::<GameSession>();
    assert_eq!(session.score(), 0);
    assert_eq!(session.remaining().len(), 2);
    assert_eq!(session.target(), Some(target.as_str()));
    let judged = app.world().resource::<Events<GuessJudged>>();
    let mut cursor = judged.get_cursor();
    assert!(cursor
        .read(judged)
        .any(|e| e.verdict == Guess::Incorrect && e.name == wrong));
}

#[test]
fn busy_narration_swallows_clicks() {
    let mut app = test_app(&["a", "b"]);
    finish_intro(&mut app);
    let target = current_target(&app);
    app.world_mut().resource_mut::<VoiceState>().playing =
        Some(VoiceKind::Object(target.clone()));
    submit(&mut app, &target);
    app.update();
    let session = app.world().resource::<GameSession>();
    assert_eq!(session.score(), 0);
    assert_eq!(session.target(), Some(target.as_str()));
    // a swallowed click produces no verdict at all
    let judged = app.world().resource::<Events<GuessJudged>>();
    let mut cursor = judged.get_cursor();
    assert_eq!(cursor.read(judged).count(), 0);
}

#[test]
fn narration_completion_marks_target_heard() {
    let mut app = test_app(&["a", "b"]);
    finish_intro(&mut app);
    let target = current_target(&app);
    assert!(!app.world().resource::<GameSession>().heard());
    app.world_mut().send_event(VoiceFinished {
        kind: VoiceKind::Object(target.clone()),
        outcome: VoiceOutcome::Completed,
    });
    app.update();
    assert!(app.world().resource::<GameSession>().heard());
    // replaying the same word keeps it heard; a different word is ignored
    app.world_mut().send_event(VoiceFinished {
        kind: VoiceKind::Object("someone else".into()),
        outcome: VoiceOutcome::Completed,
    });
    app.update();
    assert!(app.world().resource::<GameSession>().heard());
}

#[test]
fn clearing_the_catalog_reaches_victory() {
    let mut app = test_app(&["a", "b"]);
    finish_intro(&mut app);
    for _ in 0..2 {
        let target = current_target(&app);
        submit(&mut app, &target);
        for _ in 0..4 {
            app.update();
        }
    }
    assert_eq!(screen(&app), Screen::Victory);
    let session = app.world().resource::<GameSession>();
    assert!(session.finished());
    assert_eq!(session.score(), session.max_score());
}

#[test]
fn victory_change_fires_exactly_once() {
    let mut app = test_app(&["only"]);
    finish_intro(&mut app);
    let mut cursor = app.world().resource::<Events<ScreenChange>>().get_cursor();
    submit(&mut app, "only");
    app.update();
    {
        let events = app.world().resource::<Events<ScreenChange>>();
        let victories = cursor
            .read(events)
            .filter(|c| c.to == Screen::Victory)
            .count();
        assert_eq!(victories, 1);
    }
    for _ in 0..6 {
        app.update();
    }
    let events = app.world().resource::<Events<ScreenChange>>();
    assert_eq!(
        cursor
            .read(events)
            .filter(|c| c.to == Screen::Victory)
            .count(),
        0,
        "victory must not be raised again"
    );
}

#[test]
fn returning_to_start_resets_the_session() {
    let mut app = test_app(&["a", "b"]);
    finish_intro(&mut app);
    for _ in 0..2 {
        let target = current_target(&app);
        submit(&mut app, &target);
        for _ in 0..4 {
            app.update();
        }
    }
    assert_eq!(screen(&app), Screen::Victory);
    app.world_mut().send_event(ScreenChange { to: Screen::Start });
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(screen(&app), Screen::Start);
    let session = app.world().resource::<GameSession>();
    assert_eq!(session.score(), 0);
    assert_eq!(session.remaining().len(), 2);
    assert!(session.target().is_none());
}
