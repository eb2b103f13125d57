use super::*;

/// Spawn the match-over overlay centred over the frozen field.
///
/// Shows the final score with its summary tier line, a "PLAY AGAIN" button
/// that starts a fresh match, and a "MAIN MENU" button back to the splash.
pub fn setup_match_over(
    mut commands: Commands,
    match_state: Res<MatchState>,
    config: Res<GameConfig>,
) {
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
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.72)),
            ZIndex(300),
            MatchOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(340.0),
                        ..default()
                    },
                    BackgroundColor(backdrop_color()),
                    BorderColor::all(title_color()),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("THANKS FOR PLAYING!"),
                        TextFont {
                            font_size: 40.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new(summary_line(
                            match_state.score,
                            config.homerun_king_score,
                        )),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(if match_state.score >= config.homerun_king_score {
                            hint_color()
                        } else {
                            subtitle_color()
                        }),
                    ));

                    card.spawn((
                        Text::new(format!(
                            "{} pitches faced over {} rounds",
                            match_state.pitches_thrown, match_state.extensions_earned
                        )),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(card, 8.0);

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(start_bg()),
                        BorderColor::all(start_border()),
                        PlayAgainButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("PLAY AGAIN"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(start_text()),
                        ));
                    });

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(quit_bg()),
                        BorderColor::all(quit_border()),
                        BackToMenuButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("MAIN MENU"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(quit_text()),
                        ));
                    });

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("Press Enter to play again"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));
                });
        });
}

/// Recursively despawn all match-over overlay entities.
pub fn cleanup_match_over(mut commands: Commands, query: Query<Entity, With<MatchOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Play Again / Main Menu actions in the match-over overlay.
///
/// Re-entering `Playing` runs the `OnEnter` reset, so the new match starts
/// from zeroed counters whichever path the player takes.
#[allow(clippy::type_complexity)]
pub fn match_over_button_system(
    play_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<PlayAgainButton>)>,
    menu_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<BackToMenuButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let wants_replay = keys.just_pressed(KeyCode::Enter)
        || play_query.iter().any(|(i, _)| *i == Interaction::Pressed);

    if wants_replay {
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children) in play_query.iter() {
        match interaction {
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(start_text());
                    }
                }
            }
            Interaction::Pressed => {}
        }
    }

    for (interaction, children) in menu_query.iter() {
        match interaction {
            Interaction::Pressed => {
                next_state.set(GameState::MainMenu);
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(quit_text());
                    }
                }
            }
        }
    }
}
