use bevy::asset::LoadState;
use bevy::prelude::*;
use monument_catalog::MonumentCatalog;

use crate::constants::CATALOG_PATH;
use crate::engine::loading::model_loader::SelectMonumentEvent;

#[derive(Resource, Default)]
pub struct CatalogLoader {
    handle: Option<Handle<MonumentCatalog>>,
    done: bool,
}

/// Start the catalog fetch at startup.
pub fn start_loading(mut loader: ResMut<CatalogLoader>, asset_server: Res<AssetServer>) {
    info!("Loading monument catalog from: {}", CATALOG_PATH);
    loader.handle = Some(asset_server.load(CATALOG_PATH));
}

/// Insert the catalog resource once the JSON resolves and queue the first
/// monument. A failed fetch falls back to the built-in catalog so the viewer
/// still comes up.
pub fn load_catalog_system(
    mut loader: ResMut<CatalogLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    catalogs: Res<Assets<MonumentCatalog>>,
    mut select_events: EventWriter<SelectMonumentEvent>,
) {
    if loader.done {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    let catalog = match asset_server.get_load_state(&handle) {
        Some(LoadState::Loaded) => match catalogs.get(&handle) {
            Some(catalog) => catalog.clone(),
            None => return,
        },
        Some(LoadState::Failed(error)) => {
            error!("Catalog load failed ({error}), using built-in catalog");
            MonumentCatalog::builtin()
        }
        _ => return,
    };

    info!("Catalog ready: {} monuments", catalog.len());
    if let Some(first) = catalog.first() {
        select_events.write(SelectMonumentEvent {
            id: first.id.clone(),
        });
    } else {
        warn!("Catalog is empty, nothing to display");
    }
    commands.insert_resource(catalog);
    loader.done = true;
    loader.handle = None;
}
