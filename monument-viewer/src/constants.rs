/// Shared configuration for the monument viewer.

/// Catalog JSON path, relative to the asset root.
pub const CATALOG_PATH: &str = "catalog.json";

/// Zoom factor bounds and button step.
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 5.0;
pub const ZOOM_STEP: f32 = 0.5;

/// Orbit distance bounds scale with the zoom factor.
pub const ORBIT_DISTANCE_MIN_PER_ZOOM: f32 = 2.0;
pub const ORBIT_DISTANCE_MAX_PER_ZOOM: f32 = 10.0;

/// Initial camera framing, restored by the reset operation.
pub const INITIAL_ZOOM: f32 = 1.0;
pub const INITIAL_YAW: f32 = 0.6;
pub const INITIAL_PITCH: f32 = -0.35;
pub const INITIAL_DISTANCE: f32 = 6.0;

/// Pitch clamp keeps the orbit away from the poles.
pub const PITCH_LIMIT: f32 = 1.45;

/// Ground stage dimensions in metres.
pub const STAGE_RADIUS: f32 = 24.0;
pub const STAGE_GRID_EXTENT: f32 = 20.0;
pub const STAGE_GRID_CELL: f32 = 2.0;
