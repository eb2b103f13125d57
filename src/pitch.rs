//! The pitch cycle: ball spawn, arming, bat contact, and outcome evaluation.
//!
//! ## Per-pitch timeline (one shared `Ball::age` clock)
//!
//! | Age                      | Event                                           |
//! |--------------------------|-------------------------------------------------|
//! | 0                        | ball spawns at the mound, visual only (windup)  |
//! | `pitch_arm_delay_secs`   | physics attach + trajectory impulse; contact window opens |
//! | first barrel contact     | one-shot deflection impulse (zero or one per pitch) |
//! | arm delay + eval window  | final position classified, outcome emitted, ball despawned |
//!
//! Because contact and evaluation are windows on the same age clock and the
//! evaluation window is strictly positive, any contact lands before the
//! final-position sample — preserve that by construction when tuning, it is
//! not re-derived per pitch.
//!
//! The spawn system starts the next pitch only while the match controller
//! keeps the game in `Playing`; leaving `Playing` is the stop signal.  An
//! in-flight pitch is never aborted — it always runs to classification.

use crate::bat::BatBarrel;
use crate::config::GameConfig;
use crate::menu::GameState;
use crate::scoring::{classify, PitchOutcomeMessage};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// The live ball.  At most one entity carries this between spawn and
/// despawn; the spawn system no-ops while one exists.
#[derive(Component, Debug, Default)]
pub struct Ball {
    /// Seconds since this ball was spawned — the per-pitch clock.
    pub age: f32,
    /// Physics attached and contact window open.
    pub armed: bool,
    /// Set on the first barrel contact so the deflection impulse can fire
    /// at most once per pitch.
    pub deflected: bool,
}

/// Cached ball mesh/material handles, created once at startup.
#[derive(Resource)]
pub struct BallAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// True when the age clock crossed `threshold` during this frame.
#[inline]
pub fn crossed(old_age: f32, new_age: f32, threshold: f32) -> bool {
    old_age < threshold && new_age >= threshold
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Startup: build the shared ball mesh and material once.
pub fn init_ball_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
) {
    let mesh = meshes.add(Sphere::new(config.ball_radius));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.996, 0.98),
        perceptual_roughness: 0.6,
        ..default()
    });
    commands.insert_resource(BallAssets { mesh, material });
}

/// Spawn the next ball whenever none is live and a match is running.
///
/// This is both the first pitch of a match and the continuation after each
/// outcome: the previous ball's despawn is what re-opens the slot, one
/// frame after evaluation.
pub fn pitch_spawn_system(
    mut commands: Commands,
    q_ball: Query<(), With<Ball>>,
    assets: Res<BallAssets>,
    config: Res<GameConfig>,
) {
    if !q_ball.is_empty() {
        return;
    }

    commands.spawn((
        Ball::default(),
        Mesh3d(assets.mesh.clone()),
        MeshMaterial3d(assets.material.clone()),
        Transform::from_translation(config.ball_spawn_pos()),
    ));
    info!("[pitch] ball spawned at {:?}", config.ball_spawn_pos());
}

/// Advance the per-pitch clock: arm at the arm delay, evaluate at the end
/// of the evaluation window.
pub fn pitch_flight_system(
    mut commands: Commands,
    mut q_ball: Query<(Entity, &mut Ball, &Transform)>,
    mut outcomes: MessageWriter<PitchOutcomeMessage>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let Ok((entity, mut ball, transform)) = q_ball.single_mut() else {
        return;
    };

    let old_age = ball.age;
    ball.age += time.delta_secs();

    if !ball.armed && crossed(old_age, ball.age, config.pitch_arm_delay_secs) {
        ball.armed = true;
        commands.entity(entity).insert((
            RigidBody::Dynamic,
            Collider::ball(config.ball_radius),
            ColliderMassProperties::Mass(config.ball_mass),
            Restitution::coefficient(config.ball_restitution),
            Ccd { enabled: true },
            ActiveEvents::COLLISION_EVENTS,
            ExternalImpulse {
                impulse: config.pitch_impulse(),
                ..default()
            },
        ));
        info!("[pitch] armed: trajectory impulse applied");
    }

    let eval_at = config.pitch_arm_delay_secs + config.pitch_eval_window_secs;
    if crossed(old_age, ball.age, eval_at) {
        let pos = transform.translation;
        let outcome = classify(pos.y, pos.z, config.ground_level_y, config.homerun_line_z);
        info!("[pitch] evaluated at y={:.1} z={:.1}: {:?}", pos.y, pos.z, outcome);
        outcomes.write(PitchOutcomeMessage { outcome });
        // Unconditional: despawn removes the collider, which ends any
        // pending contact processing for this ball entity.
        commands.entity(entity).despawn();
    }
}

/// Apply the one-shot deflection impulse on the first ball↔barrel contact.
///
/// Runs in `PostUpdate`, after the physics step that generated the events.
/// `Ball::deflected` guards against duplicate contacts within one pitch;
/// events that name a despawned ball entity fail the query lookup and are
/// ignored, so a late contact can never leak onto the next pitch's ball.
pub fn bat_contact_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut q_ball: Query<(Entity, &mut Ball)>,
    q_barrel: Query<Entity, With<BatBarrel>>,
    config: Res<GameConfig>,
) {
    let Ok(barrel_entity) = q_barrel.single() else {
        return;
    };

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let ball_entity = if e2 == barrel_entity {
            e1
        } else if e1 == barrel_entity {
            e2
        } else {
            continue;
        };

        let Ok((entity, mut ball)) = q_ball.get_mut(ball_entity) else {
            continue;
        };
        if ball.deflected {
            continue;
        }
        ball.deflected = true;

        commands.entity(entity).insert(ExternalImpulse {
            impulse: config.deflect_impulse(),
            ..default()
        });
        info!("[pitch] bat contact: deflection impulse applied");
    }
}

/// `OnEnter(Playing)`: clear any leftover ball so a fresh match never
/// inherits a mid-flight pitch.
pub fn despawn_stray_balls(mut commands: Commands, q_ball: Query<Entity, With<Ball>>) {
    for entity in q_ball.iter() {
        commands.entity(entity).despawn();
        warn!("[pitch] stray ball despawned on match start");
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the pitch cycle.  All gameplay systems are gated on
/// `GameState::Playing`; the contact reader lives in `PostUpdate` alongside
/// the physics step that feeds it.
pub struct PitchPlugin;

impl Plugin for PitchPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            init_ball_assets.after(crate::config::load_game_config),
        )
        .add_systems(OnEnter(GameState::Playing), despawn_stray_balls)
        .add_systems(
            Update,
            (pitch_spawn_system, pitch_flight_system)
                .chain()
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            PostUpdate,
            bat_contact_system.run_if(in_state(GameState::Playing)),
        );
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
