//! Menu module: the top-level `GameState` machine and its two overlays.
//!
//! ## States
//!
//! | State      | Description                                           |
//! |------------|-------------------------------------------------------|
//! | `MainMenu` | Idle splash screen with instructions; shown on startup |
//! | `Playing`  | A match is running; pitch/swing/scoring systems active |
//! | `MatchOver`| Match finished; summary overlay with the final score  |
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                    | Schedule                  | Purpose                    |
//! |---------------------------|---------------------------|----------------------------|
//! | `setup_main_menu`         | `OnEnter(MainMenu)`       | Spawn the splash overlay   |
//! | `cleanup_main_menu`       | `OnExit(MainMenu)`        | Despawn it                 |
//! | `main_menu_button_system` | `Update / in MainMenu`    | START (guarded) / QUIT     |
//! | `setup_match_over`        | `OnEnter(MatchOver)`      | Spawn the summary overlay  |
//! | `cleanup_match_over`      | `OnExit(MatchOver)`       | Despawn it                 |
//! | `match_over_button_system`| `Update / in MatchOver`   | PLAY AGAIN / MAIN MENU     |

use bevy::prelude::*;

mod main_menu;
mod match_over;

pub use main_menu::{cleanup_main_menu, main_menu_button_system, setup_main_menu};
pub use match_over::{cleanup_match_over, match_over_button_system, setup_match_over};

use crate::bat::Bat;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::scoring::{summary_line, MatchState};
use bevy::ecs::hierarchy::ChildSpawnerCommands;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
///
/// Gameplay systems run under `.run_if(in_state(GameState::Playing))`, so a
/// finished or not-yet-started match never spawns a ball or folds an
/// outcome.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Idle splash screen; shown on startup and after "Main Menu".
    #[default]
    MainMenu,
    /// Active match.
    Playing,
    /// Match finished; summary overlay shown until replay or menu.
    MatchOver,
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the main-menu UI; the tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "Start Game" button.
#[derive(Component)]
pub struct MenuStartButton;

/// Tags the "Quit" button.
#[derive(Component)]
pub struct MenuQuitButton;

/// Root node of the match-over overlay; despawned on `OnExit(MatchOver)`.
#[derive(Component)]
pub struct MatchOverRoot;

/// Tags the "Play Again" button in the match-over overlay.
#[derive(Component)]
pub struct PlayAgainButton;

/// Tags the "Main Menu" button in the match-over overlay.
#[derive(Component)]
pub struct BackToMenuButton;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn backdrop_color() -> Color {
    Color::srgb(0.95, 0.95, 0.95)
}
fn title_color() -> Color {
    Color::srgb(0.09, 0.12, 0.25)
}
fn subtitle_color() -> Color {
    Color::srgb(0.35, 0.38, 0.50)
}
fn hint_color() -> Color {
    Color::srgb(0.85, 0.20, 0.20)
}
fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
fn start_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}

/// Spawn a fixed-height invisible spacer node.
fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, both overlays, and their button handlers.
///
/// Must be added to the app **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always
/// registered first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                main_menu_button_system.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::MatchOver), setup_match_over)
            .add_systems(OnExit(GameState::MatchOver), cleanup_match_over)
            .add_systems(
                Update,
                match_over_button_system.run_if(in_state(GameState::MatchOver)),
            );
    }
}
