//! In-game HUD: live match status and the per-pitch outcome flash.
//!
//! | System                    | Schedule   | Purpose                         |
//! |---------------------------|------------|---------------------------------|
//! | `setup_hud`               | Startup    | Spawn the status + flash nodes  |
//! | `hud_status_system`       | Update     | Refresh pitches/score text      |
//! | `outcome_flash_system`    | PostUpdate | Show "HOME RUN!" / "OUT" cues   |
//! | `outcome_flash_fade_system` | Update   | Hide the cue after its window   |
//!
//! The flash is the presentation cue the core owes the player on each
//! outcome; it reads the same message the match controller consumes and
//! never writes game state.

use crate::config::GameConfig;
use crate::menu::GameState;
use crate::scoring::{MatchState, PitchOutcome, PitchOutcomeMessage};
use bevy::prelude::*;

// ── Component markers & resources ─────────────────────────────────────────────

/// Marker for the persistent status text node.
#[derive(Component)]
pub struct HudStatusText;

/// Marker for the centred outcome flash text node.
#[derive(Component)]
pub struct HudFlashText;

/// Countdown for the visible outcome flash; `None` while hidden.
#[derive(Resource, Default)]
pub struct OutcomeFlash {
    /// Seconds of flash remaining; `None` means the cue is hidden.
    pub remaining: Option<f32>,
}

fn flash_color(outcome: PitchOutcome) -> Color {
    match outcome {
        PitchOutcome::HomeRun => Color::srgb(1.0, 0.85, 0.25),
        PitchOutcome::Out => Color::srgb(0.95, 0.35, 0.30),
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Spawn the permanent status node (top left) and the hidden flash node
/// (centred).
pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::srgb(0.09, 0.12, 0.25)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            ..default()
        },
        HudStatusText,
    ));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            ZIndex(100),
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new(""),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::NONE),
                HudFlashText,
            ));
        });
    eprintln!("[SETUP] HUD spawned");
}

/// Refresh the live status line from the match state projection.
pub fn hud_status_system(
    mut q: Query<&mut Text, With<HudStatusText>>,
    match_state: Res<MatchState>,
    state: Res<State<GameState>>,
    config: Res<GameConfig>,
) {
    let Ok(mut text) = q.single_mut() else {
        return;
    };

    text.0 = match state.get() {
        GameState::MainMenu => String::new(),
        _ => format!(
            "Pitches left: {}   Home runs: {}   Round {}",
            match_state.pitches_remaining(config.pitches_per_extension),
            match_state.score,
            match_state.extensions_earned,
        ),
    };
}

/// Light the flash text when an outcome lands.
///
/// Runs in `PostUpdate` with the other outcome consumers so the cue shows
/// on the same frame the pitch resolves.
pub fn outcome_flash_system(
    mut outcomes: MessageReader<PitchOutcomeMessage>,
    mut q: Query<(&mut Text, &mut TextColor), With<HudFlashText>>,
    mut flash: ResMut<OutcomeFlash>,
    config: Res<GameConfig>,
) {
    let Ok((mut text, mut color)) = q.single_mut() else {
        return;
    };

    for msg in outcomes.read() {
        text.0 = match msg.outcome {
            PitchOutcome::HomeRun => "HOME RUN!".to_string(),
            PitchOutcome::Out => "OUT".to_string(),
        };
        *color = TextColor(flash_color(msg.outcome));
        flash.remaining = Some(config.outcome_flash_secs);
    }
}

/// Count the visible flash down and hide it when the window closes.
pub fn outcome_flash_fade_system(
    mut q: Query<(&mut Text, &mut TextColor), With<HudFlashText>>,
    mut flash: ResMut<OutcomeFlash>,
    time: Res<Time>,
) {
    let Some(remaining) = flash.remaining else {
        return;
    };

    let remaining = remaining - time.delta_secs();
    if remaining <= 0.0 {
        flash.remaining = None;
        if let Ok((mut text, mut color)) = q.single_mut() {
            text.0.clear();
            *color = TextColor(Color::NONE);
        }
    } else {
        flash.remaining = Some(remaining);
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the HUD refresh and flash systems; the nodes themselves are
/// spawned from the startup sequence in `main.rs`.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OutcomeFlash>()
            .add_systems(Update, (hud_status_system, outcome_flash_fade_system))
            .add_systems(PostUpdate, outcome_flash_system);
    }
}
