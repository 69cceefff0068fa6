//! Shared monument catalog types for the Heritage 3D viewer.
//!
//! The catalog is the single canonical source of monument records: a JSON
//! asset loaded at startup by the viewer, with lookup by slug identifier.

pub mod catalog;
pub mod monument;

pub use catalog::MonumentCatalog;
pub use monument::Monument;
