//! Outcome classification and the session/match controller.
//!
//! The classifier is a pure function of the ball's final (y, z); the match
//! controller is a pure reducer folding [`PitchOutcome`]s into
//! [`MatchState`].  Keeping both pure means every scoring rule is testable
//! without a scene, a clock, or a physics world, and no handler ever does a
//! read-modify-write against shared mutable state.
//!
//! ## Match shape
//!
//! A match is blocks of `pitches_per_extension` pitches.  At each block
//! boundary: at least one home run in the block buys the next block
//! (an *extension*); a block with none ends the match.
//!
//! | After pitch | Block HR? | Effect                           |
//! |-------------|-----------|----------------------------------|
//! | mid-block   | —         | match continues                  |
//! | boundary    | yes       | `extensions_earned += 1`, go on  |
//! | boundary    | no        | `finished` latches, match over   |

use crate::config::GameConfig;
use crate::menu::GameState;
use bevy::prelude::*;

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Result of a single pitch, produced exactly once per ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchOutcome {
    HomeRun,
    Out,
}

/// Per-pitch outcome broadcast: consumed by the match controller, and
/// read-only by the HUD flash.
#[derive(Message, Debug, Clone, Copy)]
pub struct PitchOutcomeMessage {
    pub outcome: PitchOutcome,
}

/// Classify a ball's final position.
///
/// Home run iff the ball is still airborne (`y` strictly above ground
/// level) **and** strictly beyond the home-run line along the pitch axis.
/// Both comparisons are exclusive: a ball dead on the line is an out.
pub fn classify(y: f32, z: f32, ground_level_y: f32, homerun_line_z: f32) -> PitchOutcome {
    if y > ground_level_y && z > homerun_line_z {
        PitchOutcome::HomeRun
    } else {
        PitchOutcome::Out
    }
}

// ── Match state ───────────────────────────────────────────────────────────────

/// Cumulative match bookkeeping.
///
/// Mutated only by replacing the resource with the result of
/// [`MatchState::apply`]; nothing else writes to the fields.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    /// Home runs hit this match.
    pub score: u32,
    /// Pitches resolved this match; +1 per outcome, never reset mid-match.
    pub pitches_thrown: u32,
    /// Extension blocks granted, counting the opening block.  Starts at 1.
    pub extensions_earned: u32,
    /// Whether the current block has produced at least one home run.
    pub homerun_this_extension: bool,
    /// Latches true at the first home-run-less block boundary; no outcome
    /// is processed after it.
    pub finished: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            score: 0,
            pitches_thrown: 0,
            extensions_earned: 1,
            homerun_this_extension: false,
            finished: false,
        }
    }
}

impl MatchState {
    /// Pure reducer: fold one pitch outcome into the next match state.
    ///
    /// Callers must not invoke this after `finished`; the system-level
    /// guard in [`match_progress_system`] enforces that.
    #[must_use]
    pub fn apply(mut self, outcome: PitchOutcome, pitches_per_extension: u32) -> Self {
        if outcome == PitchOutcome::HomeRun {
            self.score += 1;
            self.homerun_this_extension = true;
        }
        self.pitches_thrown += 1;

        if self.pitches_thrown == pitches_per_extension * self.extensions_earned {
            if self.homerun_this_extension {
                self.extensions_earned += 1;
                self.homerun_this_extension = false;
            } else {
                self.finished = true;
            }
        }
        self
    }

    /// Pitches left in the current extension block — the HUD projection.
    #[inline]
    pub fn pitches_remaining(&self, pitches_per_extension: u32) -> u32 {
        (pitches_per_extension * self.extensions_earned).saturating_sub(self.pitches_thrown)
    }
}

/// Match-over summary line, tiered by final score (the original's share
/// text, minus the network).
pub fn summary_line(score: u32, king_score: u32) -> String {
    if score >= king_score {
        format!("{score} home runs — you are the HOME RUN KING!")
    } else if score >= king_score / 2 {
        format!("{score} home runs! The crown is almost in reach!")
    } else if score == 0 {
        "Not a single home run... don't worry, neither can the devs.".to_string()
    } else {
        format!("{score} home runs this match!")
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Fold this frame's pitch outcomes into [`MatchState`] and end the match
/// when the reducer latches `finished`.
///
/// Outcomes arriving after the finish (a logic defect upstream, not a
/// recoverable condition) are rejected here so the invariants on
/// `MatchState` hold no matter what the producer does.
pub fn match_progress_system(
    mut outcomes: MessageReader<PitchOutcomeMessage>,
    mut match_state: ResMut<MatchState>,
    mut next_state: ResMut<NextState<GameState>>,
    config: Res<GameConfig>,
) {
    for msg in outcomes.read() {
        if match_state.finished {
            warn!(
                "[match] ignoring {:?} delivered after the match finished",
                msg.outcome
            );
            continue;
        }

        *match_state = match_state.apply(msg.outcome, config.pitches_per_extension);
        info!(
            "[match] {:?}: score={} pitches={} block={}",
            msg.outcome, match_state.score, match_state.pitches_thrown,
            match_state.extensions_earned
        );

        if match_state.finished {
            next_state.set(GameState::MatchOver);
        }
    }
}

/// `OnEnter(Playing)`: the explicit reset — zeroed counters, one opening
/// block — replacing the original's reset-via-page-reload escape hatch.
pub fn reset_match_system(mut match_state: ResMut<MatchState>) {
    *match_state = MatchState::default();
    info!("[match] reset: fresh match state");
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the match state, the outcome message channel, and the
/// progress/reset systems.
pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MatchState>()
            .add_message::<PitchOutcomeMessage>()
            .add_systems(OnEnter(GameState::Playing), reset_match_system)
            .add_systems(
                // Outcomes are emitted from PostUpdate; fold them the same
                // frame, after the emitters.
                PostUpdate,
                match_progress_system.run_if(in_state(GameState::Playing)),
            );
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GROUND_LEVEL_Y, HOMERUN_KING_SCORE, HOMERUN_LINE_Z};

    fn classify_default(y: f32, z: f32) -> PitchOutcome {
        classify(y, z, GROUND_LEVEL_Y, HOMERUN_LINE_Z)
    }

    fn run_match(outcomes: &[PitchOutcome]) -> MatchState {
        outcomes.iter().fold(MatchState::default(), |state, &o| {
            assert!(!state.finished, "no outcome may be applied after finish");
            state.apply(o, 3)
        })
    }

    use PitchOutcome::{HomeRun, Out};

    // ── classifier ────────────────────────────────────────────────────────────

    #[test]
    fn classifier_is_pure_and_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify_default(4.0, 250.0), HomeRun);
            assert_eq!(classify_default(4.0, 120.0), Out);
            assert_eq!(classify_default(-0.5, 250.0), Out);
        }
    }

    #[test]
    fn homerun_line_is_exclusive() {
        // Dead on the line: out.  A hair past it: home run.
        assert_eq!(classify_default(3.0, 200.0), Out);
        assert_eq!(classify_default(3.0, 200.0001), HomeRun);
    }

    #[test]
    fn ground_level_is_exclusive() {
        assert_eq!(classify_default(0.0, 300.0), Out);
        assert_eq!(classify_default(0.0001, 300.0), HomeRun);
    }

    // ── reducer ───────────────────────────────────────────────────────────────

    #[test]
    fn three_outs_finish_the_opening_block() {
        // Scenario A.
        let end = run_match(&[Out, Out, Out]);
        assert!(end.finished);
        assert_eq!(end.score, 0);
        assert_eq!(end.extensions_earned, 1);
        assert_eq!(end.pitches_thrown, 3);
    }

    #[test]
    fn one_homerun_buys_an_extension() {
        // Scenario B.
        let mid = run_match(&[HomeRun, Out, Out]);
        assert!(!mid.finished, "a home run in the block extends the match");
        assert_eq!(mid.extensions_earned, 2);
        assert!(!mid.homerun_this_extension, "flag resets per block");

        let end = [Out, Out, Out]
            .iter()
            .fold(mid, |s, &o| s.apply(o, 3));
        assert!(end.finished);
        assert_eq!(end.score, 1);
        assert_eq!(end.pitches_thrown, 6);
        assert_eq!(end.extensions_earned, 2);
    }

    #[test]
    fn consecutive_homeruns_never_finish() {
        // Scenario C: 10 straight home runs across extensions.
        let state = run_match(&[HomeRun; 10]);
        assert!(!state.finished);
        assert_eq!(state.score, 10);

        // First all-out block after the streak ends it.
        let pad = (3 - state.pitches_thrown % 3) % 3;
        let mut state = (0..pad).fold(state, |s, _| s.apply(HomeRun, 3));
        assert!(!state.finished);
        for _ in 0..3 {
            state = state.apply(Out, 3);
        }
        assert!(state.finished);
        assert_eq!(state.score, 10 + pad);
    }

    #[test]
    fn completed_matches_satisfy_block_arithmetic() {
        for outcomes in [
            vec![Out, Out, Out],
            vec![HomeRun, Out, Out, Out, Out, Out],
            vec![
                HomeRun, HomeRun, HomeRun, HomeRun, Out, Out, Out, Out, Out,
            ],
        ] {
            let end = run_match(&outcomes);
            assert!(end.finished);
            assert_eq!(
                end.pitches_thrown,
                3 * end.extensions_earned,
                "pitches at finish must fill every granted block"
            );
            assert!(end.score <= end.pitches_thrown);
        }
    }

    #[test]
    fn pitches_remaining_projection() {
        let state = run_match(&[HomeRun, Out]);
        assert_eq!(state.pitches_remaining(3), 1);
        let state = state.apply(Out, 3);
        // Boundary with a home run banked: a fresh block of 3.
        assert_eq!(state.pitches_remaining(3), 3);
    }

    // ── system level: post-finish rejection ──────────────────────────────────

    #[test]
    fn outcomes_after_finish_are_ignored() {
        use bevy::state::app::StatesPlugin;

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.init_state::<GameState>();
        app.add_message::<PitchOutcomeMessage>();
        app.insert_resource(GameConfig::default());
        app.insert_resource(MatchState {
            finished: true,
            pitches_thrown: 3,
            ..Default::default()
        });
        app.add_systems(PostUpdate, match_progress_system);

        app.world_mut().write_message(PitchOutcomeMessage {
            outcome: PitchOutcome::HomeRun,
        });
        app.update();

        let state = app.world().resource::<MatchState>();
        assert_eq!(
            state.pitches_thrown, 3,
            "no outcome may be folded in after finish"
        );
        assert_eq!(state.score, 0);
    }

    // ── summary tiers ─────────────────────────────────────────────────────────

    #[test]
    fn summary_tiers_switch_at_documented_scores() {
        assert!(summary_line(0, HOMERUN_KING_SCORE).contains("Not a single"));
        assert!(summary_line(3, HOMERUN_KING_SCORE).contains("3 home runs this match"));
        assert!(summary_line(5, HOMERUN_KING_SCORE).contains("almost in reach"));
        assert!(summary_line(10, HOMERUN_KING_SCORE).contains("HOME RUN KING"));
        assert!(summary_line(14, HOMERUN_KING_SCORE).contains("HOME RUN KING"));
    }
}
