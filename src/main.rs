use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;

use homerun_derby::bat::BatPlugin;
use homerun_derby::config::{self, GameConfig};
use homerun_derby::field;
use homerun_derby::hud::{self, HudPlugin};
use homerun_derby::menu::MenuPlugin;
use homerun_derby::pitch::PitchPlugin;
use homerun_derby::scoring::ScoringPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Home Run Derby".into(),
                resolution: WindowResolution::new(960, 720),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(field::sky_color()))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/game.toml (if present) in the Startup
        // schedule, before any setup system reads it.
        .insert_resource(GameConfig::default())
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // MenuPlugin first: it registers GameState, which every
        // `.run_if(in_state(...))` below depends on.
        .add_plugins(MenuPlugin)
        .add_plugins((BatPlugin, PitchPlugin, ScoringPlugin, HudPlugin))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                field::setup_physics_config.after(config::load_game_config),
                field::setup_camera.after(config::load_game_config),
                field::setup_field.after(config::load_game_config),
                field::spawn_bat.after(config::load_game_config),
                hud::setup_hud.after(config::load_game_config),
            ),
        )
        .run();
}
