// src/core/catalogue.rs
use super::error::{PlannerError, PlannerResult};
use super::types::{ItemDef, ItemId};
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level shape of the content document described by the catalogue
/// ingestion interface: one array per item family, each entry deserializing
/// directly into `ItemDef`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogueDocument {
    #[serde(default)]
    structures: Vec<ItemDef>,
    #[serde(default)]
    units: Vec<ItemDef>,
    #[serde(default)]
    colonists: Vec<ItemDef>,
    #[serde(default)]
    research: Vec<ItemDef>,
}

/// The immutable, read-only definitions catalogue. Shared across snapshots
/// via `Arc` (see `core::snapshot::PlanetSnapshot::defs`); nothing in this
/// crate ever mutates a `Catalogue` after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    items: HashMap<ItemId, ItemDef>,
}

impl Catalogue {
    /// Parses a JSON document of the shape described in the catalogue
    /// ingestion interface and validates it.
    pub fn from_json_str(raw: &str) -> PlannerResult<Catalogue> {
        let doc: CatalogueDocument = serde_json::from_str(raw)
            .map_err(|e| PlannerError::Catalogue(format!("malformed catalogue document: {}", e)))?;
        Catalogue::from_document(doc)
    }

    /// Same as `from_json_str` but accepts an already-parsed `serde_json::Value`.
    pub fn from_json_value(value: serde_json::Value) -> PlannerResult<Catalogue> {
        let doc: CatalogueDocument = serde_json::from_value(value)
            .map_err(|e| PlannerError::Catalogue(format!("malformed catalogue document: {}", e)))?;
        Catalogue::from_document(doc)
    }

    fn from_document(doc: CatalogueDocument) -> PlannerResult<Catalogue> {
        let mut items = HashMap::new();
        for def in doc
            .structures
            .into_iter()
            .chain(doc.units)
            .chain(doc.colonists)
            .chain(doc.research)
        {
            let id = def.id.clone();
            if items.insert(id.clone(), def).is_some() {
                return Err(PlannerError::Catalogue(format!(
                    "duplicate item id in catalogue: {}",
                    id
                )));
            }
        }
        let catalogue = Catalogue { items };
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Checks that every prerequisite referenced by an item resolves to a
    /// known id. Catches a malformed content document before it ever reaches
    /// a snapshot.
    pub fn validate(&self) -> PlannerResult<()> {
        for def in self.items.values() {
            for prereq in &def.prerequisites {
                if !self.items.contains_key(prereq) {
                    return Err(PlannerError::Catalogue(format!(
                        "item '{}' references unknown prerequisite '{}'",
                        def.id, prereq
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.values()
    }
}
