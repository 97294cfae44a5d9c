use rand::rngs::StdRng;
use rand::SeedableRng;

use word_matcher::core::catalog::{Catalog, CatalogFile};
use word_matcher::gameplay::session::{GameSession, Guess, POINTS_PER_CORRECT};

fn full_playthrough(seed: u64, items: usize) -> GameSession {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = GameSession::from_items((0..items).map(|i| format!("word{i}")));
    while !s.finished() {
        let target = s.start_round(&mut rng).expect("items remain").to_string();
        // a wrong click along the way never changes the outcome
        assert_eq!(s.submit_guess("no such word", false), Guess::Incorrect);
        let verdict = s.submit_guess(&target, false);
        assert!(matches!(verdict, Guess::Correct { .. }));
    }
    s
}

#[test]
fn playthrough_reaches_max_score() {
    for seed in 0..8 {
        let s = full_playthrough(seed, 20);
        assert_eq!(s.score(), 200, "seed {seed}");
        assert_eq!(s.score(), s.max_score());
        assert!(s.finished());
    }
}

#[test]
fn score_tracks_solved_items_exactly() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut s = GameSession::from_items((0..20).map(|i| format!("word{i}")));
    let total = s.remaining().len();
    let mut solved = 0;
    while let Some(target) = s.start_round(&mut rng).map(str::to_string) {
        assert_eq!(s.score(), solved as u32 * POINTS_PER_CORRECT);
        s.submit_guess(&target, false);
        solved += 1;
        assert_eq!(s.remaining().len(), total - solved);
    }
    assert_eq!(solved, total);
}

#[test]
fn each_item_is_target_exactly_once() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = GameSession::from_items(["a", "b", "c", "d", "e"]);
    let mut seen: Vec<String> = Vec::new();
    while let Some(target) = s.start_round(&mut rng).map(str::to_string) {
        assert!(!seen.contains(&target), "target '{target}' repeated");
        s.submit_guess(&target, false);
        seen.push(target);
    }
    seen.sort();
    assert_eq!(seen, ["a", "b", "c", "d", "e"]);
}

#[test]
fn busy_narration_freezes_the_session() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = GameSession::from_items(["a", "b", "c"]);
    let target = s.start_round(&mut rng).unwrap().to_string();
    for _ in 0..5 {
        assert_eq!(s.submit_guess(&target, true), Guess::Ignored);
    }
    assert_eq!(s.score(), 0);
    assert_eq!(s.target(), Some(target.as_str()));
    // narration over: the same click now lands
    assert_eq!(
        s.submit_guess(&target, false),
        Guess::Correct { finished: false }
    );
}

#[test]
fn last_item_reports_finished() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut s = GameSession::from_items(["only"]);
    let target = s.start_round(&mut rng).unwrap().to_string();
    assert_eq!(
        s.submit_guess(&target, false),
        Guess::Correct { finished: true }
    );
    assert!(s.finished());
    assert!(s.start_round(&mut rng).is_none());
}

#[test]
fn shuffle_keeps_the_same_members() {
    let mut rng = StdRng::seed_from_u64(11);
    let s = GameSession::from_items(["a", "b", "c", "d"]);
    let mut shuffled = s.shuffled_remaining(&mut rng);
    shuffled.sort();
    assert_eq!(shuffled, ["a", "b", "c", "d"]);
}

#[test]
fn reset_restores_the_full_catalog() {
    let catalog = Catalog::from_file(CatalogFile {
        version: 1,
        items: vec!["a".into(), "b".into()],
    });
    let mut rng = StdRng::seed_from_u64(21);
    let mut s = GameSession::new(&catalog);
    let target = s.start_round(&mut rng).unwrap().to_string();
    s.submit_guess(&target, false);
    assert_eq!(s.score(), POINTS_PER_CORRECT);
    s.reset(&catalog);
    assert_eq!(s.score(), 0);
    assert_eq!(s.remaining().len(), 2);
    assert!(s.target().is_none());
    assert!(!s.heard());
}
