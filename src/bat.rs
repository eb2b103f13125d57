//! Bat swing controller: input and the three-phase swing animation.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`swing_intent_clear_system`] — resets `SwingIntent` edge flags.
//! 2. [`keyboard_to_swing_intent_system`] — translates Space press/release
//!    edges into `SwingIntent` fields.
//! 3. [`apply_swing_intent_system`] — folds the intent into [`BatSwing`]:
//!    press arms Phase A (cock), release arms Phase B (swing) and schedules
//!    Phase C (return).
//! 4. [`swing_animation_system`] — advances the active rotation tween and
//!    writes the bat root `Transform`.
//!
//! The **input abstraction layer** (`SwingIntent`) makes the swing logic
//! fully testable: tests populate the resource directly and run only the
//! apply step, or drive [`BatSwing`] with injected dt.
//!
//! This module owns bat orientation exclusively.  It never touches the
//! ball, the score, or the match state; the pitch cycle only ever sees the
//! barrel's collider volume.

use crate::config::GameConfig;
use bevy::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker for the bat rig root entity (the transform the swing rotates).
#[derive(Component)]
pub struct Bat;

/// Marker for the barrel child entity carrying the contact collider.
#[derive(Component)]
pub struct BatBarrel;

/// A rotation interpolation in progress: Euler XYZ radians, eased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTween {
    pub from: Vec3,
    pub to: Vec3,
    pub elapsed: f32,
    pub duration: f32,
}

impl RotationTween {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance by `dt` seconds and return the eased sample.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.sample()
    }

    /// Current eased orientation.
    pub fn sample(&self) -> Vec3 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ease_in_out_cubic((self.elapsed / self.duration).clamp(0.0, 1.0));
        self.from.lerp(self.to, t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Cubic ease-in-out on `t ∈ [0, 1]`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Swing state machine attached to the bat root.
///
/// `held` is the idempotence guard: a second press while held is a no-op,
/// so Phase A is never restarted mid-flight by key auto-repeat.  Release
/// always clears `held`, so an out-of-order press/release pair cannot wedge
/// the controller.
#[derive(Component, Debug, Clone)]
pub struct BatSwing {
    /// Whether the trigger key is currently held.
    pub held: bool,
    /// Active rotation tween, if any phase is animating.
    pub tween: Option<RotationTween>,
    /// Countdown (seconds) until Phase C starts; armed on release.
    pub return_delay: Option<f32>,
    /// Last sampled orientation, the start point for the next phase.
    pub rotation: Vec3,
}

impl Default for BatSwing {
    fn default() -> Self {
        Self {
            held: false,
            tween: None,
            return_delay: None,
            rotation: Vec3::ZERO,
        }
    }
}

impl BatSwing {
    /// Trigger pressed.  No-op while already held.
    pub fn press(&mut self, cocked: Vec3, cock_secs: f32) {
        if self.held {
            return;
        }
        self.held = true;
        self.tween = Some(RotationTween::new(self.rotation, cocked, cock_secs));
    }

    /// Trigger released.  Always clears `held`; starts Phase B from the
    /// current orientation and arms the Phase C countdown.
    pub fn release(&mut self, swing: Vec3, hit_secs: f32, return_delay: f32) {
        self.held = false;
        self.tween = Some(RotationTween::new(self.rotation, swing, hit_secs));
        self.return_delay = Some(return_delay);
    }

    /// Advance the timeline by `dt` seconds and return the orientation to
    /// apply this frame.
    ///
    /// The Phase C countdown ticks independently of the active tween; when
    /// it expires the return tween starts from wherever the bat currently
    /// is, replacing any still-running Phase B.
    pub fn advance(&mut self, dt: f32, rest: Vec3, return_secs: f32) -> Vec3 {
        if let Some(remaining) = self.return_delay {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.return_delay = None;
                self.tween = Some(RotationTween::new(self.rotation, rest, return_secs));
            } else {
                self.return_delay = Some(remaining);
            }
        }

        if let Some(tween) = self.tween.as_mut() {
            self.rotation = tween.advance(dt);
            if tween.is_finished() {
                self.tween = None;
            }
        }
        self.rotation
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Per-frame trigger edges, written by the keyboard system and consumed by
/// [`apply_swing_intent_system`].
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwingIntent {
    /// The trigger key went down this frame.
    pub press: bool,
    /// The trigger key came up this frame.
    pub release: bool,
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Clear `SwingIntent` at the start of every frame.
///
/// Must run before any system that writes to `SwingIntent`.
pub fn swing_intent_clear_system(mut intent: ResMut<SwingIntent>) {
    *intent = SwingIntent::default();
}

/// Translate Space key edges into [`SwingIntent`].  Every other key is
/// ignored; the game has exactly one input binding.
pub fn keyboard_to_swing_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<SwingIntent>,
) {
    if keys.just_pressed(KeyCode::Space) {
        intent.press = true;
    }
    if keys.just_released(KeyCode::Space) {
        intent.release = true;
    }
}

/// Fold this frame's intent into the [`BatSwing`] state machine.
///
/// This is the **only** system that starts swing phases; the keyboard
/// system only writes to `SwingIntent`.  Tests populate the resource
/// directly and call this system in isolation.
pub fn apply_swing_intent_system(
    mut q: Query<&mut BatSwing, With<Bat>>,
    intent: Res<SwingIntent>,
    config: Res<GameConfig>,
) {
    let Ok(mut swing) = q.single_mut() else {
        return;
    };

    if intent.press {
        swing.press(config.bat_cocked_rot(), config.swing_cock_secs);
    }
    if intent.release {
        swing.release(
            config.bat_swing_rot(),
            config.swing_hit_secs,
            config.swing_return_delay_secs,
        );
    }
}

/// Advance the swing timeline and write the bat root rotation.
pub fn swing_animation_system(
    mut q: Query<(&mut BatSwing, &mut Transform), With<Bat>>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let Ok((mut swing, mut transform)) = q.single_mut() else {
        return;
    };

    let rot = swing.advance(
        time.delta_secs(),
        config.bat_rest_rot(),
        config.swing_return_secs,
    );
    transform.rotation = Quat::from_euler(EulerRot::XYZ, rot.x, rot.y, rot.z);
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the swing input pipeline.  Active in every state, like the
/// original: the bat answers the trigger key even before a match starts.
pub struct BatPlugin;

impl Plugin for BatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwingIntent>().add_systems(
            Update,
            (
                swing_intent_clear_system,
                keyboard_to_swing_intent_system,
                apply_swing_intent_system,
                swing_animation_system,
            )
                .chain(),
        );
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        BAT_COCKED_ROT, BAT_REST_ROT, BAT_SWING_ROT, SWING_COCK_SECS, SWING_HIT_SECS,
        SWING_RETURN_DELAY_SECS, SWING_RETURN_SECS,
    };

    fn press(swing: &mut BatSwing) {
        swing.press(BAT_COCKED_ROT, SWING_COCK_SECS);
    }

    fn release(swing: &mut BatSwing) {
        swing.release(BAT_SWING_ROT, SWING_HIT_SECS, SWING_RETURN_DELAY_SECS);
    }

    fn advance(swing: &mut BatSwing, dt: f32) -> Vec3 {
        swing.advance(dt, BAT_REST_ROT, SWING_RETURN_SECS)
    }

    // ── easing ────────────────────────────────────────────────────────────────

    #[test]
    fn ease_hits_exact_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= prev, "easing must not decrease (t={i}/100)");
            prev = v;
        }
    }

    // ── held flag truth table ─────────────────────────────────────────────────

    #[test]
    fn held_tracks_most_recent_edge() {
        let mut swing = BatSwing::default();
        assert!(!swing.held);
        press(&mut swing);
        assert!(swing.held);
        press(&mut swing);
        assert!(swing.held);
        release(&mut swing);
        assert!(!swing.held);
        release(&mut swing);
        assert!(!swing.held);
        press(&mut swing);
        assert!(swing.held);
    }

    #[test]
    fn release_without_press_still_resets_and_swings() {
        let mut swing = BatSwing::default();
        release(&mut swing);
        assert!(!swing.held);
        assert!(swing.tween.is_some(), "release always starts Phase B");
        assert!(swing.return_delay.is_some(), "release always arms Phase C");
    }

    // ── idempotent press ──────────────────────────────────────────────────────

    #[test]
    fn duplicate_press_does_not_restart_phase_a() {
        let mut swing = BatSwing::default();
        press(&mut swing);
        advance(&mut swing, SWING_COCK_SECS / 2.0);
        let mid_elapsed = swing.tween.unwrap().elapsed;
        assert!(mid_elapsed > 0.0);

        // Key auto-repeat fires a second press mid-flight.
        press(&mut swing);
        assert_eq!(
            swing.tween.unwrap().elapsed,
            mid_elapsed,
            "duplicate press must not restart the cock tween"
        );
    }

    // ── phase sequencing ──────────────────────────────────────────────────────

    #[test]
    fn full_swing_reaches_cocked_then_swing_then_rest() {
        let mut swing = BatSwing::default();

        press(&mut swing);
        let rot = advance(&mut swing, SWING_COCK_SECS);
        assert!(
            (rot - BAT_COCKED_ROT).length() < 1e-4,
            "Phase A must end at the cocked orientation, got {rot:?}"
        );

        release(&mut swing);
        let rot = advance(&mut swing, SWING_HIT_SECS);
        assert!(
            (rot - BAT_SWING_ROT).length() < 1e-4,
            "Phase B must end at the swing orientation, got {rot:?}"
        );

        // Phase C has not started yet: the bat holds the swing pose.
        let rot = advance(&mut swing, 0.05);
        assert!(
            (rot - BAT_SWING_ROT).length() < 1e-4,
            "bat holds the swing pose until the return delay expires"
        );

        // Cross the delay and run the whole return tween.
        let rot = advance(&mut swing, SWING_RETURN_DELAY_SECS + SWING_RETURN_SECS);
        assert!(
            (rot - BAT_REST_ROT).length() < 1e-4,
            "Phase C must end at rest, got {rot:?}"
        );
        assert!(swing.tween.is_none(), "timeline is idle after Phase C");
    }

    #[test]
    fn return_delay_ticks_independently_of_phase_b() {
        let mut swing = BatSwing::default();
        release(&mut swing);

        // Advance less than the delay: still counting down.
        advance(&mut swing, 0.1);
        assert!(swing.return_delay.is_some());

        // Cross the delay boundary: the return tween replaces Phase B.
        advance(&mut swing, SWING_RETURN_DELAY_SECS);
        assert!(swing.return_delay.is_none());
        let tween = swing.tween.expect("return tween must be active");
        assert_eq!(tween.to, BAT_REST_ROT);
    }

    // ── system level ──────────────────────────────────────────────────────────

    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(SwingIntent::default());
        app.insert_resource(GameConfig::default());
        app.add_systems(Update, apply_swing_intent_system);
        app
    }

    fn bat_swing(app: &mut App) -> BatSwing {
        let mut q = app.world_mut().query_filtered::<&BatSwing, With<Bat>>();
        q.single(app.world()).unwrap().clone()
    }

    #[test]
    fn intent_press_arms_the_cock_tween() {
        let mut app = build_test_app();
        app.world_mut()
            .spawn((Bat, BatSwing::default(), Transform::default()));

        app.insert_resource(SwingIntent {
            press: true,
            release: false,
        });
        app.update();

        let swing = bat_swing(&mut app);
        assert!(swing.held);
        let tween = swing.tween.expect("press must start Phase A");
        assert_eq!(tween.to, GameConfig::default().bat_cocked_rot());
    }

    #[test]
    fn intent_release_clears_held_and_arms_return() {
        let mut app = build_test_app();
        app.world_mut().spawn((
            Bat,
            BatSwing {
                held: true,
                ..Default::default()
            },
            Transform::default(),
        ));

        app.insert_resource(SwingIntent {
            press: false,
            release: true,
        });
        app.update();

        let swing = bat_swing(&mut app);
        assert!(!swing.held);
        assert!(swing.return_delay.is_some());
    }
}
