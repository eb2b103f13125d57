//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the tuneable
//! constants in [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read
//! values with `config.homerun_line_z`, `config.pitch_impulse()`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{validate_homerun_line, validate_pitch_windows};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/game.toml`.  Vector-valued constants are mirrored as
/// `[x, y, z]` arrays so they stay plain TOML.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Pitch Timeline ───────────────────────────────────────────────────────
    pub pitch_arm_delay_secs: f32,
    pub pitch_eval_window_secs: f32,
    pub ball_spawn_pos: [f32; 3],
    pub pitch_impulse: [f32; 3],
    pub deflect_impulse: [f32; 3],

    // ── Ball Body ────────────────────────────────────────────────────────────
    pub ball_radius: f32,
    pub ball_mass: f32,
    pub ball_restitution: f32,

    // ── Swing Phases ─────────────────────────────────────────────────────────
    pub bat_cocked_rot: [f32; 3],
    pub bat_swing_rot: [f32; 3],
    pub bat_rest_rot: [f32; 3],
    pub swing_cock_secs: f32,
    pub swing_hit_secs: f32,
    pub swing_return_delay_secs: f32,
    pub swing_return_secs: f32,

    // ── Scoring ──────────────────────────────────────────────────────────────
    pub homerun_line_z: f32,
    pub ground_level_y: f32,
    pub pitches_per_extension: u32,
    pub homerun_king_score: u32,

    // ── Field Layout ─────────────────────────────────────────────────────────
    pub bat_root_pos: [f32; 3],
    pub bat_barrel_radius: f32,
    pub bat_barrel_height: f32,
    pub bat_barrel_local_y: f32,
    pub bat_handle_radius: f32,
    pub bat_handle_height: f32,
    pub bat_restitution: f32,
    pub ground_size: f32,
    pub ground_restitution: f32,
    pub ground_friction: f32,
    pub gravity_y: f32,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub outcome_flash_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Pitch Timeline
            pitch_arm_delay_secs: PITCH_ARM_DELAY_SECS,
            pitch_eval_window_secs: PITCH_EVAL_WINDOW_SECS,
            ball_spawn_pos: BALL_SPAWN_POS.to_array(),
            pitch_impulse: PITCH_IMPULSE.to_array(),
            deflect_impulse: DEFLECT_IMPULSE.to_array(),
            // Ball Body
            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            ball_restitution: BALL_RESTITUTION,
            // Swing Phases
            bat_cocked_rot: BAT_COCKED_ROT.to_array(),
            bat_swing_rot: BAT_SWING_ROT.to_array(),
            bat_rest_rot: BAT_REST_ROT.to_array(),
            swing_cock_secs: SWING_COCK_SECS,
            swing_hit_secs: SWING_HIT_SECS,
            swing_return_delay_secs: SWING_RETURN_DELAY_SECS,
            swing_return_secs: SWING_RETURN_SECS,
            // Scoring
            homerun_line_z: HOMERUN_LINE_Z,
            ground_level_y: GROUND_LEVEL_Y,
            pitches_per_extension: PITCHES_PER_EXTENSION,
            homerun_king_score: HOMERUN_KING_SCORE,
            // Field Layout
            bat_root_pos: BAT_ROOT_POS.to_array(),
            bat_barrel_radius: BAT_BARREL_RADIUS,
            bat_barrel_height: BAT_BARREL_HEIGHT,
            bat_barrel_local_y: BAT_BARREL_LOCAL_Y,
            bat_handle_radius: BAT_HANDLE_RADIUS,
            bat_handle_height: BAT_HANDLE_HEIGHT,
            bat_restitution: BAT_RESTITUTION,
            ground_size: GROUND_SIZE,
            ground_restitution: GROUND_RESTITUTION,
            ground_friction: GROUND_FRICTION,
            gravity_y: GRAVITY_Y,
            // HUD
            outcome_flash_secs: OUTCOME_FLASH_SECS,
        }
    }
}

impl GameConfig {
    #[inline]
    pub fn ball_spawn_pos(&self) -> Vec3 {
        Vec3::from_array(self.ball_spawn_pos)
    }

    #[inline]
    pub fn pitch_impulse(&self) -> Vec3 {
        Vec3::from_array(self.pitch_impulse)
    }

    #[inline]
    pub fn deflect_impulse(&self) -> Vec3 {
        Vec3::from_array(self.deflect_impulse)
    }

    #[inline]
    pub fn bat_cocked_rot(&self) -> Vec3 {
        Vec3::from_array(self.bat_cocked_rot)
    }

    #[inline]
    pub fn bat_swing_rot(&self) -> Vec3 {
        Vec3::from_array(self.bat_swing_rot)
    }

    #[inline]
    pub fn bat_rest_rot(&self) -> Vec3 {
        Vec3::from_array(self.bat_rest_rot)
    }

    #[inline]
    pub fn bat_root_pos(&self) -> Vec3 {
        Vec3::from_array(self.bat_root_pos)
    }

    /// Validate the loaded values; returns the first violation found.
    pub fn validate(&self) -> crate::error::GameResult<()> {
        validate_pitch_windows(self.pitch_arm_delay_secs, self.pitch_eval_window_secs)?;
        validate_homerun_line(self.homerun_line_z)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors and
/// validation failures are printed to stderr but do not abort the game —
/// the compiled defaults stay in effect.  A missing file is silently fine
/// (defaults are already in place from `insert_resource`).
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *config = loaded;
                    println!("✓ Loaded game config from {path}");
                }
                Err(e) => {
                    eprintln!("⚠ Rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}
