use bevy::prelude::*;

use super::{ACCENT, PANEL_BACKGROUND, PANEL_SURFACE, TEXT_MUTED, TEXT_PRIMARY};
use crate::controls::viewer_state::ViewerState;
use crate::engine::assets::monument_assets::MonumentAssets;
use monument_catalog::Monument;

#[derive(Component)]
pub struct InfoPanelRoot;

/// Rebuild the info panel whenever the displayed monument changes.
///
/// The panel is respawned from scratch; visibility is handled separately so
/// a rebuild never overrides the user's toggle.
pub fn refresh_info_panel(
    mut commands: Commands,
    assets: Res<MonumentAssets>,
    viewer_state: Res<ViewerState>,
    existing: Query<Entity, With<InfoPanelRoot>>,
) {
    if !assets.is_changed() {
        return;
    }
    let Some(monument) = assets.current.clone() else {
        return;
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    spawn_info_panel(&mut commands, &monument, viewer_state.info_visible);
}

/// Show or hide the panel following the info flag.
pub fn sync_info_panel_visibility(
    viewer_state: Res<ViewerState>,
    mut panels: Query<&mut Node, With<InfoPanelRoot>>,
) {
    if !viewer_state.is_changed() {
        return;
    }
    for mut node in &mut panels {
        node.display = if viewer_state.info_visible {
            Display::Flex
        } else {
            Display::None
        };
    }
}

fn spawn_info_panel(commands: &mut Commands, monument: &Monument, visible: bool) {
    commands
        .spawn((
            InfoPanelRoot,
            Name::new("InfoPanel"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                width: Val::Px(320.0),
                max_height: Val::Percent(80.0),
                padding: UiRect::all(Val::Px(16.0)),
                display: if visible { Display::Flex } else { Display::None },
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                overflow: Overflow::clip_y(),
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(monument.name.clone()),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));

            if monument.endangered {
                panel
                    .spawn((
                        BackgroundColor(Color::srgb(0.55, 0.16, 0.12)),
                        Node {
                            padding: UiRect::axes(Val::Px(8.0), Val::Px(2.0)),
                            align_self: AlignSelf::FlexStart,
                            ..default()
                        },
                    ))
                    .with_children(|badge| {
                        badge.spawn((
                            Text::new("ENDANGERED"),
                            TextFont {
                                font_size: 11.0,
                                ..default()
                            },
                            TextColor(TEXT_PRIMARY),
                        ));
                    });
            }

            spawn_detail_row(panel, "Location", &monument.location);
            spawn_detail_row(panel, "Period", &monument.period);
            spawn_detail_row(panel, "Category", &monument.category);

            panel.spawn((
                Text::new(monument.description.clone()),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(TEXT_MUTED),
            ));

            if !monument.facts.is_empty() {
                panel
                    .spawn((
                        BackgroundColor(PANEL_SURFACE),
                        Node {
                            width: Val::Percent(100.0),
                            padding: UiRect::all(Val::Px(10.0)),
                            display: Display::Flex,
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(4.0),
                            ..default()
                        },
                    ))
                    .with_children(|facts| {
                        facts.spawn((
                            Text::new("Did you know?"),
                            TextFont {
                                font_size: 13.0,
                                ..default()
                            },
                            TextColor(ACCENT),
                        ));
                        for fact in &monument.facts {
                            facts.spawn((
                                Text::new(format!("• {fact}")),
                                TextFont {
                                    font_size: 12.0,
                                    ..default()
                                },
                                TextColor(TEXT_MUTED),
                            ));
                        }
                    });
            }
        });
}

fn spawn_detail_row(parent: &mut ChildSpawnerCommands, label: &str, value: &str) {
    parent
        .spawn(Node {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(format!("{label}:")),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(ACCENT),
            ));
            row.spawn((
                Text::new(value.to_string()),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
        });
}
