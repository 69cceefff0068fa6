use bevy::prelude::*;

use super::{ACCENT, PANEL_BACKGROUND, PANEL_SURFACE, TEXT_MUTED, TEXT_PRIMARY};
use crate::engine::assets::monument_assets::MonumentAssets;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadProgress;

#[derive(Component)]
pub struct LoadingScreenRoot;

#[derive(Component)]
pub struct LoadingBarFill;

#[derive(Component)]
pub struct LoadingPercentText;

#[derive(Component)]
pub struct LoadingTitleText;

/// Centered overlay shown while the catalog or a monument scene loads.
pub fn spawn_loading_screen(commands: &mut Commands) {
    commands
        .spawn((
            LoadingScreenRoot,
            Name::new("LoadingScreen"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(50.0),
                top: Val::Percent(50.0),
                margin: UiRect {
                    left: Val::Px(-160.0),
                    top: Val::Px(-48.0),
                    ..default()
                },
                width: Val::Px(320.0),
                padding: UiRect::all(Val::Px(16.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn((
                LoadingTitleText,
                Text::new("Loading catalog…"),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
            panel
                .spawn((
                    BackgroundColor(PANEL_SURFACE),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(10.0),
                        ..default()
                    },
                ))
                .with_children(|track| {
                    track.spawn((
                        LoadingBarFill,
                        BackgroundColor(ACCENT),
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    ));
                });
            panel.spawn((
                LoadingPercentText,
                Text::new("0%"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(TEXT_MUTED),
            ));
        });
}

/// Drive the overlay from the current load: title, fill width, percentage.
/// Hidden once the pending load completes (or fails and is cleared).
pub fn update_loading_screen(
    state: Res<State<AppState>>,
    progress: Res<LoadProgress>,
    assets: Res<MonumentAssets>,
    mut roots: Query<&mut Node, With<LoadingScreenRoot>>,
    mut fills: Query<
        &mut Node,
        (With<LoadingBarFill>, Without<LoadingScreenRoot>),
    >,
    mut titles: Query<&mut Text, With<LoadingTitleText>>,
    mut percents: Query<&mut Text, (With<LoadingPercentText>, Without<LoadingTitleText>)>,
) {
    let catalog_pending = matches!(state.get(), AppState::Loading);
    let model_pending = assets.scene.is_some() && !assets.is_loaded;
    let show = catalog_pending || (model_pending && !progress.is_complete());

    for mut node in &mut roots {
        node.display = if show { Display::Flex } else { Display::None };
    }
    if !show {
        return;
    }

    if let Some(monument) = &assets.current {
        for mut text in &mut titles {
            text.0 = format!("Loading {}…", monument.name);
        }
    }
    for mut node in &mut fills {
        node.width = Val::Percent(progress.percent());
    }
    for mut text in &mut percents {
        text.0 = format!("{:.0}%", progress.percent());
    }
}
