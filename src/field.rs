//! Field setup: camera, lighting, ground slab, bat rig, and gravity.
//!
//! Everything here is stateless scene construction run once at startup;
//! the gameplay systems only ever see the markers ([`Bat`], [`BatBarrel`])
//! and the collider volumes these systems leave behind.

use crate::bat::{Bat, BatBarrel, BatSwing};
use crate::config::GameConfig;
use crate::constants::{CAMERA_FOV_DEG, CAMERA_POS};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn ground_color() -> Color {
    Color::srgb(0.26, 0.41, 0.16)
}
fn barrel_color() -> Color {
    Color::srgb(0.97, 0.71, 0.45)
}
fn handle_color() -> Color {
    Color::srgb(0.02, 0.02, 0.02)
}

/// Sky blue used as the window clear colour.
pub fn sky_color() -> Color {
    Color::srgb(0.20, 0.60, 1.0)
}

// ── Startup systems ───────────────────────────────────────────────────────────

/// Configure Rapier gravity for the derby field.
pub fn setup_physics_config(mut q: Query<&mut RapierConfiguration>, config: Res<GameConfig>) {
    for mut cfg in q.iter_mut() {
        cfg.gravity = Vec3::new(0.0, config.gravity_y, 0.0);
    }
}

/// Spawn the batter's-eye camera: behind the plate, looking down the pitch
/// axis toward the mound.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_POS)
            .looking_at(Vec3::new(0.0, 2.0, 100.0), Vec3::Y),
    ));
    eprintln!("[SETUP] Camera spawned");
}

/// Spawn the lights and the ground slab.
///
/// The slab is rotated 45° about Y for the diamond look; the rotation is
/// purely visual — the collider surface is flat either way.
pub fn setup_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, -20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let size = config.ground_size;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size, 0.2, size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ground_color(),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.1, 0.0)
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
        RigidBody::Fixed,
        Collider::cuboid(size / 2.0, 0.1, size / 2.0),
        Restitution::coefficient(config.ground_restitution),
        Friction::coefficient(config.ground_friction),
    ));
    eprintln!("[SETUP] Field spawned");
}

/// Spawn the bat rig: a kinematic root carrying the swing state, with the
/// collider-bearing barrel and a visual-only handle as children.
///
/// The swing controller rotates the root; the barrel collider follows
/// through the hierarchy, which is all the pitch cycle ever reads.
pub fn spawn_bat(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
) {
    commands
        .spawn((
            Bat,
            BatSwing::default(),
            RigidBody::KinematicPositionBased,
            Transform::from_translation(config.bat_root_pos()),
            Visibility::default(),
        ))
        .with_children(|rig| {
            rig.spawn((
                BatBarrel,
                Mesh3d(meshes.add(Cylinder::new(
                    config.bat_barrel_radius,
                    config.bat_barrel_height,
                ))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: barrel_color(),
                    perceptual_roughness: 0.8,
                    ..default()
                })),
                Transform::from_xyz(0.0, config.bat_barrel_local_y, 0.0),
                Collider::cylinder(config.bat_barrel_height / 2.0, config.bat_barrel_radius),
                Restitution::coefficient(config.bat_restitution),
                ActiveCollisionTypes::DYNAMIC_KINEMATIC,
            ));
            rig.spawn((
                Mesh3d(meshes.add(Cylinder::new(
                    config.bat_handle_radius,
                    config.bat_handle_height,
                ))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: handle_color(),
                    perceptual_roughness: 0.9,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ));
        });
    eprintln!("[SETUP] Bat rig spawned");
}
