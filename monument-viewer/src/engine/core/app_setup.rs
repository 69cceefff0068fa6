use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use monument_catalog::MonumentCatalog;

use crate::controls::command::{
    ViewerCommandEvent, handle_keyboard_shortcuts, handle_viewer_commands,
};
use crate::controls::viewer_state::{ViewerState, sync_fullscreen_flag};
use crate::engine::assets::monument_assets::MonumentAssets;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{AppState, notify_load_progress, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::catalog_loader::{CatalogLoader, load_catalog_system, start_loading};
use crate::engine::loading::model_loader::{
    SelectMonumentEvent, begin_monument_load, poll_monument_load,
};
use crate::engine::loading::progress::LoadProgress;
use crate::engine::scene::stage::spawn_stage;
use crate::engine::systems::fps_tracking::{
    fps_notification_system, fps_text_update_system, spawn_fps_text,
};
use crate::rpc::web_rpc::RpcBridgePlugin;
use crate::ui::control_bar::{
    control_bar_interactions, spawn_control_bar, update_zoom_indicator, zoom_slider_drag,
};
use crate::ui::info_panel::{refresh_info_panel, sync_info_panel_visibility};
use crate::ui::loading_screen::{spawn_loading_screen, update_loading_screen};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the monument catalog as a loadable JSON asset type.
        .add_plugins(JsonAssetPlugin::<MonumentCatalog>::new(&["json"]))
        .add_plugins(RpcBridgePlugin);

    app.init_resource::<CatalogLoader>()
        .init_resource::<MonumentAssets>()
        .init_resource::<LoadProgress>()
        .init_resource::<OrbitCamera>()
        .init_resource::<ViewerState>()
        .add_event::<ViewerCommandEvent>()
        .add_event::<SelectMonumentEvent>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_catalog_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (
                handle_keyboard_shortcuts,
                control_bar_interactions,
                zoom_slider_drag,
                handle_viewer_commands,
                begin_monument_load,
                poll_monument_load,
                camera_controller,
                sync_fullscreen_flag,
            )
                .chain()
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(
            Update,
            (
                update_zoom_indicator,
                refresh_info_panel,
                sync_info_panel_visibility,
                update_loading_screen,
                notify_load_progress,
                fps_text_update_system,
                fps_notification_system,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Spawn the camera, stage, and UI tree.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    orbit: Res<OrbitCamera>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(orbit.eye_position()).looking_at(orbit.focus, Vec3::Y),
    ));

    spawn_stage(&mut commands, &mut meshes, &mut materials);
    spawn_control_bar(&mut commands);
    spawn_loading_screen(&mut commands);
    spawn_fps_text(&mut commands);
}
