//! # Material Catalog
//!
//! Resolves the `material_id` of an add-form payload to a `Material`
//! snapshot. Where the materials live (a JSON file, a remote document
//! store) is the caller's business; the ledger only sees this trait.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Material;

/// Material lookup used when adding entries.
pub trait MaterialCatalog {
    /// Returns a snapshot of the material, if known.
    fn material(&self, id: &str) -> Option<Material>;

    /// Like [`MaterialCatalog::material`], but unknown ids are an error.
    fn resolve(&self, id: &str) -> CoreResult<Material> {
        self.material(id)
            .ok_or_else(|| CoreError::MaterialNotFound(id.to_string()))
    }
}

/// Catalog held in memory, in insertion order.
///
/// Serializes as a plain JSON array of materials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryCatalog {
    materials: Vec<Material>,
}

impl InMemoryCatalog {
    pub fn new(materials: Vec<Material>) -> Self {
        InMemoryCatalog { materials }
    }

    /// Adds a material, replacing any existing one with the same id.
    pub fn insert(&mut self, material: Material) {
        match self.materials.iter_mut().find(|m| m.id == material.id) {
            Some(existing) => *existing = material,
            None => self.materials.push(material),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl MaterialCatalog for InMemoryCatalog {
    fn material(&self, id: &str) -> Option<Material> {
        self.materials.iter().find(|m| m.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: &str, price: f64) -> Material {
        Material {
            id: id.to_string(),
            name: id.to_uppercase(),
            width: 2440.0,
            height: 1220.0,
            price,
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let catalog = InMemoryCatalog::new(vec![material("mdf", 40.0)]);
        assert_eq!(catalog.resolve("mdf").unwrap().price, 40.0);
        assert!(matches!(
            catalog.resolve("teak"),
            Err(CoreError::MaterialNotFound(id)) if id == "teak"
        ));
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut catalog = InMemoryCatalog::default();
        catalog.insert(material("mdf", 40.0));
        catalog.insert(material("ply", 55.0));
        catalog.insert(material("mdf", 42.0));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.material("mdf").unwrap().price, 42.0);
    }

    #[test]
    fn test_deserializes_from_array() {
        let json = r#"[{"id":"mdf","name":"MDF 18","width":2750,"height":1850,"price":100}]"#;
        let catalog: InMemoryCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.iter().next().unwrap().name, "MDF 18");
    }
}
