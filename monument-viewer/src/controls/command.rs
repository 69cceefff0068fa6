use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};
use monument_catalog::MonumentCatalog;

use crate::controls::viewer_state::ViewerState;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::model_loader::SelectMonumentEvent;

/// Everything the viewer can be asked to do, regardless of input source.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    ZoomIn,
    ZoomOut,
    SetZoom(f32),
    ResetView,
    ToggleFullscreen,
    ToggleInfo,
    SelectMonument(String),
}

/// Source of a command, for logging and conditional behaviour.
#[derive(Debug, Clone, Copy)]
pub enum CommandSource {
    Ui,
    Keyboard,
    Rpc,
}

#[derive(Event)]
pub struct ViewerCommandEvent {
    pub command: ViewerCommand,
    pub source: CommandSource,
}

/// Apply queued viewer commands to camera, presentation flags, window mode,
/// and the asset loader.
pub fn handle_viewer_commands(
    mut events: EventReader<ViewerCommandEvent>,
    mut orbit: ResMut<OrbitCamera>,
    mut viewer_state: ResMut<ViewerState>,
    mut select_events: EventWriter<SelectMonumentEvent>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    for event in events.read() {
        match &event.command {
            ViewerCommand::ZoomIn => orbit.zoom_in(),
            ViewerCommand::ZoomOut => orbit.zoom_out(),
            ViewerCommand::SetZoom(zoom) => orbit.set_zoom(*zoom),
            ViewerCommand::ResetView => orbit.reset(),
            ViewerCommand::ToggleInfo => {
                let visible = viewer_state.toggle_info();
                info!("Info panel {}", if visible { "shown" } else { "hidden" });
            }
            ViewerCommand::ToggleFullscreen => {
                // Request only; sync_fullscreen_flag reads the outcome back
                if let Ok(mut window) = windows.single_mut() {
                    window.mode = if matches!(window.mode, WindowMode::Windowed) {
                        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
                    } else {
                        WindowMode::Windowed
                    };
                }
            }
            ViewerCommand::SelectMonument(id) => {
                select_events.write(SelectMonumentEvent { id: id.clone() });
            }
        }
        debug!("Applied {:?} from {:?}", event.command, event.source);
    }
}

/// Native keyboard shortcuts. On WASM the embedding page drives the viewer
/// through RPC instead.
pub fn handle_keyboard_shortcuts(
    #[cfg(not(target_arch = "wasm32"))] keyboard: Res<ButtonInput<KeyCode>>,
    #[cfg(not(target_arch = "wasm32"))] catalog: Option<Res<MonumentCatalog>>,
    #[cfg(not(target_arch = "wasm32"))] mut commands_out: EventWriter<ViewerCommandEvent>,
) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut write = |command: ViewerCommand| {
            commands_out.write(ViewerCommandEvent {
                command,
                source: CommandSource::Keyboard,
            });
        };

        if keyboard.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
            write(ViewerCommand::ZoomIn);
        }
        if keyboard.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
            write(ViewerCommand::ZoomOut);
        }
        if keyboard.just_pressed(KeyCode::KeyR) {
            write(ViewerCommand::ResetView);
        }
        if keyboard.just_pressed(KeyCode::KeyF) {
            write(ViewerCommand::ToggleFullscreen);
        }
        if keyboard.just_pressed(KeyCode::KeyI) {
            write(ViewerCommand::ToggleInfo);
        }

        // Digit keys jump to catalog entries in file order
        if let Some(catalog) = catalog {
            const DIGITS: [KeyCode; 9] = [
                KeyCode::Digit1,
                KeyCode::Digit2,
                KeyCode::Digit3,
                KeyCode::Digit4,
                KeyCode::Digit5,
                KeyCode::Digit6,
                KeyCode::Digit7,
                KeyCode::Digit8,
                KeyCode::Digit9,
            ];
            for (index, key) in DIGITS.iter().enumerate() {
                if keyboard.just_pressed(*key) {
                    if let Some(monument) = catalog.at(index) {
                        write(ViewerCommand::SelectMonument(monument.id.clone()));
                    }
                }
            }
        }
    }
}
