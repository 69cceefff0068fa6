use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::{ACCENT, BUTTON_BACKGROUND, BUTTON_HOVER, PANEL_BACKGROUND, TEXT_PRIMARY};
use crate::constants::{ZOOM_MAX, ZOOM_MIN};
use crate::controls::command::{CommandSource, ViewerCommand, ViewerCommandEvent};
use crate::engine::camera::orbit_camera::OrbitCamera;

#[derive(Component)]
pub struct ControlBarRoot;

/// Fixed command a control-bar button fires when pressed.
#[derive(Component, Clone, Copy, Debug)]
pub enum ControlAction {
    ZoomOut,
    ZoomIn,
    Reset,
    Fullscreen,
    Info,
}

#[derive(Component)]
pub struct ZoomSliderTrack;

#[derive(Component)]
pub struct ZoomSliderFill;

#[derive(Component)]
pub struct ZoomLabel;

/// Spawns the bottom control bar with the fixed viewer controls.
pub fn spawn_control_bar(commands: &mut Commands) {
    commands
        .spawn((
            ControlBarRoot,
            Name::new("ControlBar"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-260.0)),
                width: Val::Px(520.0),
                height: Val::Px(48.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|bar| {
            spawn_button(bar, ControlAction::ZoomOut, "−");
            spawn_slider(bar);
            spawn_button(bar, ControlAction::ZoomIn, "+");
            bar.spawn((
                ZoomLabel,
                Text::new("1.0×"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
                Node {
                    width: Val::Px(44.0),
                    ..default()
                },
            ));
            spawn_button(bar, ControlAction::Reset, "⟲");
            spawn_button(bar, ControlAction::Fullscreen, "⛶");
            spawn_button(bar, ControlAction::Info, "i");
        });
}

fn spawn_button(parent: &mut ChildSpawnerCommands, action: ControlAction, label: &str) {
    parent
        .spawn((
            action,
            Button,
            Name::new(format!("{action:?}Button")),
            BackgroundColor(BUTTON_BACKGROUND),
            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
            Node {
                width: Val::Px(32.0),
                height: Val::Px(32.0),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
        });
}

fn spawn_slider(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            ZoomSliderTrack,
            Button,
            Name::new("ZoomSlider"),
            BackgroundColor(BUTTON_BACKGROUND),
            Node {
                width: Val::Px(140.0),
                height: Val::Px(8.0),
                display: Display::Flex,
                align_items: AlignItems::Stretch,
                ..default()
            },
        ))
        .with_children(|track| {
            track.spawn((
                ZoomSliderFill,
                BackgroundColor(ACCENT),
                Node {
                    width: Val::Percent(zoom_fraction(1.0) * 100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
            ));
        });
}

fn zoom_fraction(zoom: f32) -> f32 {
    ((zoom - ZOOM_MIN) / (ZOOM_MAX - ZOOM_MIN)).clamp(0.0, 1.0)
}

/// Translate button presses into viewer commands and tint hovered buttons.
pub fn control_bar_interactions(
    mut interactions: Query<
        (&Interaction, &ControlAction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut commands_out: EventWriter<ViewerCommandEvent>,
) {
    for (interaction, action, mut background) in &mut interactions {
        match interaction {
            Interaction::Pressed => {
                let command = match action {
                    ControlAction::ZoomOut => ViewerCommand::ZoomOut,
                    ControlAction::ZoomIn => ViewerCommand::ZoomIn,
                    ControlAction::Reset => ViewerCommand::ResetView,
                    ControlAction::Fullscreen => ViewerCommand::ToggleFullscreen,
                    ControlAction::Info => ViewerCommand::ToggleInfo,
                };
                commands_out.write(ViewerCommandEvent {
                    command,
                    source: CommandSource::Ui,
                });
            }
            Interaction::Hovered => *background = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *background = BackgroundColor(BUTTON_BACKGROUND),
        }
    }
}

/// Map a press on the slider track to a zoom factor within the clamp.
pub fn zoom_slider_drag(
    windows: Query<&Window, With<PrimaryWindow>>,
    tracks: Query<(&Interaction, &ComputedNode, &GlobalTransform), With<ZoomSliderTrack>>,
    mut commands_out: EventWriter<ViewerCommandEvent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    for (interaction, node, transform) in &tracks {
        if *interaction != Interaction::Pressed {
            continue;
        }
        // ComputedNode geometry is in physical pixels; cursor is logical
        let size = node.size() * node.inverse_scale_factor();
        let center = transform.translation().truncate() * node.inverse_scale_factor();
        if size.x <= 0.0 {
            continue;
        }
        let left = center.x - size.x * 0.5;
        let fraction = ((cursor.x - left) / size.x).clamp(0.0, 1.0);
        let zoom = ZOOM_MIN + fraction * (ZOOM_MAX - ZOOM_MIN);
        commands_out.write(ViewerCommandEvent {
            command: ViewerCommand::SetZoom(zoom),
            source: CommandSource::Ui,
        });
    }
}

/// Keep the slider fill and zoom label in step with the camera.
pub fn update_zoom_indicator(
    orbit: Res<OrbitCamera>,
    mut fills: Query<&mut Node, With<ZoomSliderFill>>,
    mut labels: Query<&mut Text, With<ZoomLabel>>,
) {
    if !orbit.is_changed() {
        return;
    }
    for mut node in &mut fills {
        node.width = Val::Percent(zoom_fraction(orbit.zoom) * 100.0);
    }
    for mut text in &mut labels {
        text.0 = format!("{:.1}×", orbit.zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_fraction_spans_the_clamp_range() {
        assert_eq!(zoom_fraction(ZOOM_MIN), 0.0);
        assert_eq!(zoom_fraction(ZOOM_MAX), 1.0);
        assert_eq!(zoom_fraction((ZOOM_MIN + ZOOM_MAX) / 2.0), 0.5);
        // Out-of-range input clamps rather than overflowing the track
        assert_eq!(zoom_fraction(ZOOM_MAX + 3.0), 1.0);
        assert_eq!(zoom_fraction(0.0), 0.0);
    }
}
