use serde::{Deserialize, Serialize};

/// Display record for one monument. Mirrors the catalog JSON structure
/// exactly; immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Monument {
    /// Slug identifier, e.g. "taj-mahal". Unique within a catalog.
    pub id: String,
    pub name: String,
    pub location: String,
    /// Construction period as displayed, e.g. "1632–1653 CE".
    pub period: String,
    pub category: String,
    pub description: String,
    /// Preview image path, relative to the asset root.
    pub image: String,
    /// GLTF/GLB scene path, relative to the asset root.
    pub model: String,
    #[serde(default)]
    pub endangered: bool,
    /// Ordered fact strings shown in the info panel.
    #[serde(default)]
    pub facts: Vec<String>,
}
