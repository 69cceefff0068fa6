use bevy::asset::RecursiveDependencyLoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use monument_catalog::MonumentCatalog;

use crate::engine::assets::monument_assets::{MonumentAssets, MonumentSceneRoot};
use crate::engine::loading::progress::LoadProgress;
use crate::rpc::web_rpc::RpcBridge;

/// Request to display a monument from the catalog.
#[derive(Event)]
pub struct SelectMonumentEvent {
    pub id: String,
}

/// Begin a GLTF scene load for the selected monument.
///
/// One outstanding load per viewer: a new selection bumps the load
/// generation and drops the previous handle, abandoning the superseded
/// fetch. A single attempt is made per selection; there is no retry.
pub fn begin_monument_load(
    mut events: EventReader<SelectMonumentEvent>,
    catalog: Option<Res<MonumentCatalog>>,
    mut assets: ResMut<MonumentAssets>,
    mut progress: ResMut<LoadProgress>,
    mut rpc: ResMut<RpcBridge>,
    asset_server: Res<AssetServer>,
) {
    // Last selection wins when several arrive in one frame
    let Some(event) = events.read().last() else {
        return;
    };
    let Some(catalog) = catalog else {
        warn!("Monument selected before the catalog resolved: {}", event.id);
        return;
    };
    let Some(monument) = catalog.get(&event.id) else {
        warn!("Unknown monument id: {}", event.id);
        rpc.notify(
            "viewer.load_failed",
            serde_json::json!({ "id": event.id, "reason": "unknown id" }),
        );
        return;
    };
    if assets.is_loaded && assets.current.as_ref().is_some_and(|m| m.id == monument.id) {
        return;
    }

    info!("Loading monument scene: {} ({})", monument.name, monument.model);
    let generation = progress.begin();
    progress.mark_stage(generation, "Request issued", 10.0);

    assets.generation = generation;
    assets.is_loaded = false;
    assets.current = Some(monument.clone());
    assets.scene = Some(
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(monument.model.clone())),
    );
}

/// Poll the pending scene load and swap the displayed monument when it
/// resolves. Resolutions for superseded generations are discarded.
pub fn poll_monument_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut assets: ResMut<MonumentAssets>,
    mut progress: ResMut<LoadProgress>,
    mut rpc: ResMut<RpcBridge>,
) {
    if assets.is_loaded {
        return;
    }
    let Some(handle) = assets.scene.clone() else {
        return;
    };
    let generation = assets.generation;
    if !progress.is_current(generation) {
        // Superseded load; the replacement will be polled next frame
        return;
    }

    match asset_server.get_recursive_dependency_load_state(&handle) {
        Some(RecursiveDependencyLoadState::Loaded) => {
            progress.mark_stage(generation, "Scene resolved", 80.0);

            if let Some(previous) = assets.root.take() {
                commands.entity(previous).despawn();
            }
            let root = commands
                .spawn((SceneRoot(handle), MonumentSceneRoot, Transform::default()))
                .id();
            assets.root = Some(root);
            assets.is_loaded = true;
            progress.mark_stage(generation, "Scene spawned", 100.0);

            let id = assets.current.as_ref().map(|m| m.id.clone());
            info!("Monument scene ready: {:?}", id);
            rpc.notify(
                "viewer.monument_loaded",
                serde_json::json!({ "id": id }),
            );
        }
        Some(RecursiveDependencyLoadState::Failed(error)) => {
            let id = assets.current.as_ref().map(|m| m.id.clone());
            error!("Monument scene load failed for {:?}: {error}", id);
            rpc.notify(
                "viewer.load_failed",
                serde_json::json!({ "id": id, "reason": error.to_string() }),
            );
            // Single attempt per selection; keep the previous scene visible
            assets.scene = None;
        }
        _ => {}
    }
}
