//! In-memory catalog implementation.

use crate::catalog::provider::CatalogProvider;
use crate::error::CatalogError;
use crate::types::CatalogEntry;
use serde_json::{Map, Value};
use std::path::Path;

/// In-memory catalog, usually loaded from a category → names JSON file.
///
/// ```json
/// {
///     "עופות": ["עוף שלם", "חזה עוף"],
///     "דגים": ["סלמון", "טונה"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemCatalog {
    entries: Vec<CatalogEntry>,
}

impl InMemCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from `(category, names)` pairs, keeping their order.
    pub fn from_categories<C, N, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut catalog = Self::new();
        for (category, names) in categories {
            let category = category.into();
            for name in names {
                catalog.put(CatalogEntry::with_category(name, category.clone()));
            }
        }
        catalog
    }

    /// Parse a category → names JSON object.
    ///
    /// Names are trimmed. Blank names are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        let object = match value {
            Value::Object(object) => object,
            _ => return Err(CatalogError::NotAnObject),
        };
        Self::from_object(object)
    }

    /// Load a category → names JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = catalog.len(),
            categories = catalog.categories().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn from_object(object: Map<String, Value>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for (category, names) in object {
            let category = category.trim().to_string();
            let names = match names {
                Value::Array(names) => names,
                _ => return Err(CatalogError::NotAList { category }),
            };
            for name in names {
                let name = match name {
                    Value::String(name) => name,
                    _ => return Err(CatalogError::NotAList { category }),
                };
                let name = name.trim();
                if name.is_empty() {
                    return Err(CatalogError::EmptyName { category });
                }
                catalog.put(CatalogEntry::with_category(name, category.clone()));
            }
        }
        Ok(catalog)
    }

    /// Add an entry. An identical entry already present is not duplicated.
    pub fn put(&mut self, entry: CatalogEntry) {
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Remove every entry named `name`. Returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        before - self.entries.len()
    }

    /// Get the first entry named `name`.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl CatalogProvider for InMemCatalog {
    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl FromIterator<CatalogEntry> for InMemCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.put(entry);
        }
        catalog
    }
}
