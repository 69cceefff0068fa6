use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::monument::Monument;

/// Complete monument catalog as a Bevy asset. Mirrors JSON structure exactly.
/// Inserted as a resource once the startup load resolves; lookup is by slug
/// and iteration order is the file order.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct MonumentCatalog {
    pub monuments: Vec<Monument>,
}

impl MonumentCatalog {
    /// Find a monument by its slug identifier.
    pub fn get(&self, id: &str) -> Option<&Monument> {
        self.monuments.iter().find(|m| m.id == id)
    }

    /// Monument at a catalog position, used for digit-key shortcuts.
    pub fn at(&self, index: usize) -> Option<&Monument> {
        self.monuments.get(index)
    }

    /// First entry, loaded automatically once the catalog resolves.
    pub fn first(&self) -> Option<&Monument> {
        self.monuments.first()
    }

    pub fn len(&self) -> usize {
        self.monuments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monuments.is_empty()
    }

    /// Small fixed catalog for tests and offline development.
    pub fn builtin() -> Self {
        Self {
            monuments: vec![
                Monument {
                    id: "taj-mahal".into(),
                    name: "Taj Mahal".into(),
                    location: "Agra, Uttar Pradesh".into(),
                    period: "1632–1653 CE".into(),
                    category: "Mausoleum".into(),
                    description: "White marble mausoleum on the south bank \
                                  of the Yamuna, built by Shah Jahan."
                        .into(),
                    image: "images/taj-mahal.jpg".into(),
                    model: "models/taj-mahal.glb".into(),
                    endangered: false,
                    facts: vec![
                        "Around 20,000 artisans worked on the construction.".into(),
                        "The four minarets lean slightly outward.".into(),
                    ],
                },
                Monument {
                    id: "hampi-stone-chariot".into(),
                    name: "Stone Chariot of Hampi".into(),
                    location: "Hampi, Karnataka".into(),
                    period: "16th century CE".into(),
                    category: "Shrine".into(),
                    description: "Garuda shrine shaped as an ornate chariot \
                                  in the Vittala temple complex."
                        .into(),
                    image: "images/hampi-stone-chariot.jpg".into(),
                    model: "models/hampi-stone-chariot.glb".into(),
                    endangered: true,
                    facts: vec!["The stone wheels once rotated on their axles.".into()],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let catalog = MonumentCatalog::builtin();
        let taj = catalog.get("taj-mahal").unwrap();
        assert_eq!(taj.name, "Taj Mahal");
        assert!(!taj.endangered);
        assert!(catalog.get("no-such-monument").is_none());
    }

    #[test]
    fn index_follows_file_order() {
        let catalog = MonumentCatalog::builtin();
        assert_eq!(catalog.at(0).unwrap().id, "taj-mahal");
        assert_eq!(catalog.first().unwrap().id, "taj-mahal");
        assert!(catalog.at(catalog.len()).is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "monuments": [{
                "id": "sanchi-stupa",
                "name": "Great Stupa",
                "location": "Sanchi, Madhya Pradesh",
                "period": "3rd century BCE",
                "category": "Stupa",
                "description": "Commissioned by emperor Ashoka.",
                "image": "images/sanchi-stupa.jpg",
                "model": "models/sanchi-stupa.glb"
            }]
        }"#;
        let catalog: MonumentCatalog = serde_json::from_str(json).unwrap();
        let stupa = catalog.get("sanchi-stupa").unwrap();
        assert!(!stupa.endangered);
        assert!(stupa.facts.is_empty());
    }
}
