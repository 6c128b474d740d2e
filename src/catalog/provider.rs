//! Defines the `CatalogProvider` trait for pluggable product sources.

use crate::types::CatalogEntry;

/// A trait that defines the common interface for a product catalog.
///
/// `CatalogProvider` abstracts over where product names live: a static
/// configuration file, a database table, or a remote service. The search
/// engine never owns a catalog; callers fetch the entries from a provider
/// and pass them in.
///
/// The `Send` and `Sync` bounds are required to allow a provider to be
/// shared across request handlers.
pub trait CatalogProvider: Send + Sync {
  /// Returns every entry, in catalog order.
  fn entries(&self) -> &[CatalogEntry];

  /// Returns the distinct category names, in order of first appearance.
  fn categories(&self) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for category in self.entries().iter().filter_map(|e| e.category.as_deref()) {
      if !categories.contains(&category) {
        categories.push(category);
      }
    }
    categories
  }

  /// Returns the names listed under `category`.
  fn names_in(&self, category: &str) -> Vec<&str> {
    self
      .entries()
      .iter()
      .filter(|e| e.category.as_deref() == Some(category))
      .map(|e| e.name.as_str())
      .collect()
  }

  /// Number of entries in the catalog.
  fn len(&self) -> usize {
    self.entries().len()
  }

  /// Whether the catalog has no entries.
  fn is_empty(&self) -> bool {
    self.entries().is_empty()
  }
}

impl CatalogProvider for Vec<CatalogEntry> {
  fn entries(&self) -> &[CatalogEntry] {
    self
  }
}
