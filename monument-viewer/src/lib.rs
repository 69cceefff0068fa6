//! Heritage 3D monument viewer.
//!
//! Interactive Bevy viewer for GLTF scenes of Indian monuments: orbit
//! camera with zoom-derived distance bounds, staged asset loading with
//! progress reporting, info-panel and fullscreen presentation controls,
//! and a JSON-RPC bridge for embedding in the Heritage 3D site.

pub mod constants;
pub mod controls;
pub mod engine;
pub mod rpc;
pub mod ui;
