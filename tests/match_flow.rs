//! Headless integration tests for the match state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics —
//! so they run fast and deterministically in CI.  Pitch outcomes are
//! injected as messages, exactly what the pitch cycle emits after each
//! evaluation, so the full session controller runs end-to-end.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`; START transitions to `Playing`.
//! 2. Three outs end the match with score 0 (scenario A).
//! 3. A home run in the opening block buys an extension (scenario B).
//! 4. A long home-run streak never ends the match (scenario C).
//! 5. Outcomes delivered outside `Playing` are not folded in.
//! 6. Replaying resets the match state to a fresh opening block.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use homerun_derby::config::GameConfig;
use homerun_derby::menu::GameState;
use homerun_derby::scoring::{MatchState, PitchOutcome, PitchOutcomeMessage, ScoringPlugin};

use PitchOutcome::{HomeRun, Out};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with the state machine and the scoring
/// plugin registered — the same wiring the binary uses, minus
/// window/rendering/physics.
fn match_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app.insert_resource(GameConfig::default());
    app.add_plugins(ScoringPlugin);
    app.update(); // settle into MainMenu
    app
}

fn current_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

fn start_match(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update(); // StateTransition fires; OnEnter(Playing) resets the match
}

/// Deliver one pitch outcome and run a frame, then a second frame so any
/// resulting state transition is observable.
fn resolve_pitch(app: &mut App, outcome: PitchOutcome) {
    app.world_mut().write_message(PitchOutcomeMessage { outcome });
    app.update();
    app.update();
}

fn match_state(app: &App) -> MatchState {
    *app.world().resource::<MatchState>()
}

// ── State machine ─────────────────────────────────────────────────────────────

#[test]
fn default_state_is_main_menu() {
    let app = match_app();
    assert_eq!(
        current_state(&app),
        GameState::MainMenu,
        "initial state must be MainMenu"
    );
}

#[test]
fn starting_a_match_enters_playing() {
    let mut app = match_app();
    start_match(&mut app);
    assert_eq!(current_state(&app), GameState::Playing);

    // No transition request: Playing persists across frames.
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(current_state(&app), GameState::Playing);
}

// ── Scenario A: three outs ────────────────────────────────────────────────────

#[test]
fn three_outs_finish_with_zero_score() {
    let mut app = match_app();
    start_match(&mut app);

    resolve_pitch(&mut app, Out);
    resolve_pitch(&mut app, Out);
    assert_eq!(current_state(&app), GameState::Playing);

    resolve_pitch(&mut app, Out);
    assert_eq!(current_state(&app), GameState::MatchOver);

    let end = match_state(&app);
    assert!(end.finished);
    assert_eq!(end.score, 0);
    assert_eq!(end.extensions_earned, 1);
    assert_eq!(end.pitches_thrown, 3);
}

// ── Scenario B: one home run buys an extension ────────────────────────────────

#[test]
fn homerun_in_opening_block_extends_the_match() {
    let mut app = match_app();
    start_match(&mut app);

    resolve_pitch(&mut app, HomeRun);
    resolve_pitch(&mut app, Out);
    resolve_pitch(&mut app, Out);

    // Boundary reached with a banked home run: the match goes on.
    assert_eq!(current_state(&app), GameState::Playing);
    let mid = match_state(&app);
    assert_eq!(mid.extensions_earned, 2);
    assert_eq!(mid.pitches_thrown, 3);

    resolve_pitch(&mut app, Out);
    resolve_pitch(&mut app, Out);
    resolve_pitch(&mut app, Out);

    assert_eq!(current_state(&app), GameState::MatchOver);
    let end = match_state(&app);
    assert_eq!(end.score, 1);
    assert_eq!(end.pitches_thrown, 6);
    assert_eq!(end.extensions_earned, 2);
    assert_eq!(end.pitches_thrown, 3 * end.extensions_earned);
}

// ── Scenario C: streaks never finish ──────────────────────────────────────────

#[test]
fn homerun_streak_keeps_the_match_alive() {
    let mut app = match_app();
    start_match(&mut app);

    for _ in 0..10 {
        resolve_pitch(&mut app, HomeRun);
        assert_eq!(
            current_state(&app),
            GameState::Playing,
            "a block with a home run must never end the match"
        );
    }
    assert_eq!(match_state(&app).score, 10);

    // Fill the current block with home runs, then go down swinging.
    while match_state(&app).pitches_thrown % 3 != 0 {
        resolve_pitch(&mut app, HomeRun);
    }
    let score_at_streak_end = match_state(&app).score;
    for _ in 0..3 {
        resolve_pitch(&mut app, Out);
    }

    assert_eq!(current_state(&app), GameState::MatchOver);
    let end = match_state(&app);
    assert_eq!(end.score, score_at_streak_end);
    assert_eq!(end.pitches_thrown, 3 * end.extensions_earned);
}

// ── Outcome gating ────────────────────────────────────────────────────────────

#[test]
fn outcomes_outside_playing_are_not_folded() {
    let mut app = match_app();

    // Still in MainMenu: the progress system is gated off.
    resolve_pitch(&mut app, HomeRun);
    assert_eq!(match_state(&app).pitches_thrown, 0);
    assert_eq!(match_state(&app).score, 0);

    // After the match ends, further outcomes are ignored too.
    start_match(&mut app);
    for _ in 0..3 {
        resolve_pitch(&mut app, Out);
    }
    assert_eq!(current_state(&app), GameState::MatchOver);
    resolve_pitch(&mut app, HomeRun);
    let end = match_state(&app);
    assert_eq!(end.pitches_thrown, 3);
    assert_eq!(end.score, 0);
}

// ── Replay reset ──────────────────────────────────────────────────────────────

#[test]
fn replay_resets_to_a_fresh_opening_block() {
    let mut app = match_app();
    start_match(&mut app);
    resolve_pitch(&mut app, HomeRun);
    resolve_pitch(&mut app, HomeRun);
    resolve_pitch(&mut app, Out);
    resolve_pitch(&mut app, Out);
    resolve_pitch(&mut app, Out);
    resolve_pitch(&mut app, Out);
    assert_eq!(current_state(&app), GameState::MatchOver);

    // PLAY AGAIN: re-entering Playing must zero every counter.
    start_match(&mut app);
    assert_eq!(current_state(&app), GameState::Playing);
    assert_eq!(match_state(&app), MatchState::default());
}
