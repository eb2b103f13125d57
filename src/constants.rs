//! Centralised gameplay and physics constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! `src/config.rs` mirrors the gameplay and physics constants into a
//! runtime-loadable [`crate::config::GameConfig`]; this file remains the
//! **authoritative default** source.

use bevy::math::Vec3;

// ── Pitch Timeline ────────────────────────────────────────────────────────────

/// Seconds between ball spawn and "arming" (physics attach + contact window).
///
/// During this window the ball is a visual-only windup cue at the spawn
/// point; the trajectory impulse and the bat-contact listener both activate
/// when it elapses.  Shortening it makes pitches come faster; it must stay
/// strictly positive so arming always precedes evaluation.
pub const PITCH_ARM_DELAY_SECS: f32 = 2.0;

/// Seconds between arming and outcome evaluation.
///
/// The ball's final position is sampled exactly this long after the
/// trajectory impulse is applied, whether or not the bat ever made contact.
/// Long enough that any feasible bat contact happens well before sampling —
/// the contact-before-evaluation ordering is guaranteed by this window, not
/// by any per-pitch synchronisation.
pub const PITCH_EVAL_WINDOW_SECS: f32 = 5.0;

/// World-space ball spawn point, far down the pitch axis from the batter.
pub const BALL_SPAWN_POS: Vec3 = Vec3::new(0.0, 5.0, 100.0);

/// Trajectory impulse applied to the ball when it arms (forward toward the
/// batter, slight lift).  With [`BALL_MASS`] = 0.4 this closes the ~97 unit
/// gap to the plate within the evaluation window.
pub const PITCH_IMPULSE: Vec3 = Vec3::new(0.0, 7.5, -10.0);

/// Deflection impulse applied on the first bat contact: sharply up and back
/// out over the pitcher toward the home-run line.
pub const DEFLECT_IMPULSE: Vec3 = Vec3::new(0.0, 40.0, 100.0);

// ── Ball Body ─────────────────────────────────────────────────────────────────

/// Ball collider radius (world units).
pub const BALL_RADIUS: f32 = 0.5;

/// Ball mass.  Impulse magnitudes above are tuned against this; raising it
/// without rescaling them shortens every flight.
pub const BALL_MASS: f32 = 0.4;

/// Ball restitution; nearly dead so a grounded ball stays down.
pub const BALL_RESTITUTION: f32 = 0.1;

// ── Swing Phases ──────────────────────────────────────────────────────────────
//
// Rotation targets are Euler XYZ radians applied to the bat root transform.
// Durations derive from the original animation windows (frames ÷ fps).

/// "Cocked" orientation reached while the trigger key is held.
pub const BAT_COCKED_ROT: Vec3 = Vec3::new(0.0, 2.0, -1.2);

/// Full-swing orientation snapped to on release.
pub const BAT_SWING_ROT: Vec3 = Vec3::new(0.0, -3.0, -1.4);

/// Neutral rest orientation.
pub const BAT_REST_ROT: Vec3 = Vec3::new(0.0, 0.0, 0.0);

/// Phase A duration: rest → cocked (10 frames at 40 fps).
pub const SWING_COCK_SECS: f32 = 0.25;

/// Phase B duration: cocked → swing (10 frames at 60 fps).
pub const SWING_HIT_SECS: f32 = 10.0 / 60.0;

/// Delay from release (Phase B start) to the start of Phase C.
pub const SWING_RETURN_DELAY_SECS: f32 = 0.3;

/// Phase C duration: swing → rest (20 frames at 30 fps).
pub const SWING_RETURN_SECS: f32 = 20.0 / 30.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Pitch-axis distance a struck ball must clear (strictly) for a home run.
///
/// Measured along +Z from the world origin, i.e. back out over the pitcher;
/// `z == HOMERUN_LINE_Z` exactly is still an out.
pub const HOMERUN_LINE_Z: f32 = 200.0;

/// Ground level: a ball at or below this height at evaluation has been
/// caught or grounded and can no longer be a home run.
pub const GROUND_LEVEL_Y: f32 = 0.0;

/// Pitches in each extension block.  The match ends at a block boundary
/// with no home run in that block.
pub const PITCHES_PER_EXTENSION: u32 = 3;

/// Score from which the match-over summary crowns a "home run king".
pub const HOMERUN_KING_SCORE: u32 = 10;

// ── Field Layout ──────────────────────────────────────────────────────────────

/// Bat rig root position: beside the plate, within reach of the incoming ball.
pub const BAT_ROOT_POS: Vec3 = Vec3::new(-1.0, 1.0, 3.0);

/// Barrel (contact cylinder) radius, height, and local offset on the bat rig.
pub const BAT_BARREL_RADIUS: f32 = 0.3;
pub const BAT_BARREL_HEIGHT: f32 = 2.0;
pub const BAT_BARREL_LOCAL_Y: f32 = 1.5;

/// Handle (visual-only cylinder) dimensions.
pub const BAT_HANDLE_RADIUS: f32 = 0.22;
pub const BAT_HANDLE_HEIGHT: f32 = 1.0;

/// Bat barrel restitution; lively so contact alone pops the ball even
/// before the deflection impulse lands.
pub const BAT_RESTITUTION: f32 = 0.9;

/// Ground slab edge length (world units); rendered rotated 45° for the
/// diamond look.
pub const GROUND_SIZE: f32 = 40.0;

/// Ground restitution; deliberately lively so grounded balls visibly die
/// near the plate instead of rolling out of frame.
pub const GROUND_RESTITUTION: f32 = 2.0;

/// Ground friction.
pub const GROUND_FRICTION: f32 = 0.07;

/// World gravity (Y component).
pub const GRAVITY_Y: f32 = -9.8;

/// Camera eye position (behind the plate at batter head height).
pub const CAMERA_POS: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Camera vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f32 = 90.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Seconds the per-pitch outcome flash ("HOME RUN!" / "OUT") stays visible.
pub const OUTCOME_FLASH_SECS: f32 = 1.2;
