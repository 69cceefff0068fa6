/// Handle-holding resource for the currently displayed monument scene.
pub mod monument_assets;
