use bevy::prelude::*;
use monument_catalog::Monument;

/// Scene assets for the monument currently shown (or loading).
///
/// Holds at most one outstanding scene handle; replacing it drops the old
/// handle, which abandons the superseded load. The generation ties the
/// handle to its `LoadProgress` entry.
#[derive(Resource, Default)]
pub struct MonumentAssets {
    /// Record being displayed or fetched.
    pub current: Option<Monument>,
    /// Pending or resolved GLTF scene handle.
    pub scene: Option<Handle<Scene>>,
    /// Spawned scene root entity, despawned when a new monument arrives.
    pub root: Option<Entity>,
    /// Load generation the scene handle belongs to.
    pub generation: u64,
    pub is_loaded: bool,
}

/// Marker for the spawned monument scene root.
#[derive(Component)]
pub struct MonumentSceneRoot;
