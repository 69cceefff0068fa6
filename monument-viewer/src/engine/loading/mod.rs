//! Asset loading systems for the monument viewer.
//!
//! Manages the two-step pipeline: catalog JSON at startup, then one GLTF
//! scene load per selected monument with staged progress tracking.

/// Catalog JSON loading and the transition into the interactive state.
pub mod catalog_loader;

/// Per-monument GLTF scene loading with stale-load protection.
pub mod model_loader;

/// Staged, monotonic load progress keyed by load generation.
pub mod progress;
