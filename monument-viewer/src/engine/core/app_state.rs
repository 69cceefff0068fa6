use bevy::prelude::*;
use monument_catalog::MonumentCatalog;

use crate::engine::assets::monument_assets::MonumentAssets;
use crate::engine::loading::progress::LoadProgress;
use crate::rpc::web_rpc::RpcBridge;

/// Viewer lifecycle: catalog fetch, then interactive. Monument loads happen
/// inside `Running` and are tracked by `LoadProgress`, not by app states.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Leave the loading state once the catalog resource exists.
pub fn transition_to_running(
    catalog: Option<Res<MonumentCatalog>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if catalog.is_some() {
        info!("→ Catalog resolved, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

/// Forward load-progress changes to the embedding page.
pub fn notify_load_progress(
    progress: Res<LoadProgress>,
    assets: Res<MonumentAssets>,
    mut rpc: ResMut<RpcBridge>,
) {
    if !progress.is_changed() || progress.is_added() {
        return;
    }
    rpc.notify(
        "viewer.load_progress",
        serde_json::json!({
            "id": assets.current.as_ref().map(|m| m.id.clone()),
            "percent": progress.percent(),
            "stages": progress.stages(),
        }),
    );
}
