/// Orbit camera state and controller for the monument viewport.
///
/// Owns the zoom factor, derived orbit-distance bounds, and the eased
/// camera transform driven by mouse input.
pub mod orbit_camera;
