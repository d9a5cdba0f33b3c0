use std::time::{Duration, Instant};

use countdown_challenge::state::reflex::{ReflexEngine, ReflexPhase};

#[test]
fn new_engine_waits() {
    let engine = ReflexEngine::new();
    assert_eq!(engine.phase(), ReflexPhase::Waiting);
    assert_eq!(engine.reaction_ms(), None);
}

#[test]
fn armed_round_flips_to_go_at_the_scheduled_instant() {
    let t0 = Instant::now();
    let mut engine = ReflexEngine::new();

    assert!(engine.arm_at(t0, Duration::from_millis(2_000)));
    assert_eq!(engine.phase(), ReflexPhase::Armed);

    assert_eq!(engine.tick_at(t0 + Duration::from_millis(1_999)), ReflexPhase::Armed);
    assert_eq!(engine.tick_at(t0 + Duration::from_millis(2_000)), ReflexPhase::Go);
}

#[test]
fn reaction_is_measured_from_the_scheduled_flip() {
    let t0 = Instant::now();
    let mut engine = ReflexEngine::new();
    engine.arm_at(t0, Duration::from_millis(2_000));

    // The tick observes the flip 7 ms late; the measurement is still
    // anchored to the scheduled instant.
    engine.tick_at(t0 + Duration::from_millis(2_007));
    assert!(engine.press_at(t0 + Duration::from_millis(2_250)));
    assert_eq!(engine.phase(), ReflexPhase::Done);
    assert_eq!(engine.reaction_ms(), Some(250));
}

#[test]
fn pressing_before_green_is_a_false_start() {
    let t0 = Instant::now();
    let mut engine = ReflexEngine::new();
    engine.arm_at(t0, Duration::from_millis(2_000));

    assert!(engine.press_at(t0 + Duration::from_millis(500)));
    assert_eq!(engine.phase(), ReflexPhase::FalseStart);
    assert_eq!(engine.reaction_ms(), None);

    // The cancelled flip never fires.
    assert_eq!(engine.tick_at(t0 + Duration::from_millis(3_000)), ReflexPhase::FalseStart);
}

#[test]
fn press_is_ignored_without_a_round_in_flight() {
    let t0 = Instant::now();
    let mut engine = ReflexEngine::new();
    assert!(!engine.press_at(t0));
    assert_eq!(engine.phase(), ReflexPhase::Waiting);
}

#[test]
fn arm_is_ignored_while_a_round_is_in_flight() {
    let t0 = Instant::now();
    let mut engine = ReflexEngine::new();
    engine.arm_at(t0, Duration::from_millis(2_000));
    assert!(!engine.arm_at(t0 + Duration::from_millis(100), Duration::from_millis(500)));

    engine.tick_at(t0 + Duration::from_millis(2_000));
    assert!(!engine.arm_at(t0 + Duration::from_millis(2_100), Duration::from_millis(500)));
}

#[test]
fn rearming_after_a_result_clears_it() {
    let t0 = Instant::now();
    let mut engine = ReflexEngine::new();
    engine.arm_at(t0, Duration::from_millis(1_000));
    engine.tick_at(t0 + Duration::from_millis(1_000));
    engine.press_at(t0 + Duration::from_millis(1_180));
    assert_eq!(engine.reaction_ms(), Some(180));

    assert!(engine.arm_at(t0 + Duration::from_secs(5), Duration::from_millis(1_000)));
    assert_eq!(engine.phase(), ReflexPhase::Armed);
    assert_eq!(engine.reaction_ms(), None);
}

#[test]
fn reset_discards_the_round() {
    let t0 = Instant::now();
    let mut engine = ReflexEngine::new();
    engine.arm_at(t0, Duration::from_millis(1_000));
    engine.reset();
    assert_eq!(engine.phase(), ReflexPhase::Waiting);
    assert_eq!(engine.tick_at(t0 + Duration::from_secs(2)), ReflexPhase::Waiting);
}
