//! Defines the extension system for the search engine.

use crate::types::{CatalogEntry, CatalogMatch, Query};

/// Separator between a product name and its cutting instruction.
pub const VARIANT_SEPARATOR: &str = " - ";

/// A trait for extensions that can hook into the search lifecycle.
///
/// Extensions allow callers to rewrite queries, reshape the candidate list
/// or adjust results without touching the engine. Entries are handed to
/// extensions as an owned copy; the caller's catalog is never modified.
///
/// # Examples
///
/// ```rust
/// use zoares_search::prelude::*;
///
/// struct Synonyms;
///
/// impl SearchExtension for Synonyms {
///     fn before_query(&self, query: &mut Query) {
///         if query.text.trim() == "פרגית" {
///             query.text = "פרגיות".to_string();
///         }
///     }
/// }
/// ```
pub trait SearchExtension: Send + Sync {
  /// Called before the query is normalized.
  fn before_query(&self, _query: &mut Query) {}

  /// Called with a copy of the catalog before it is scoped and searched.
  ///
  /// Implementing this hook costs one clone of the catalog per search.
  fn before_entries(&self, _query: &Query, _entries: &mut Vec<CatalogEntry>) {}

  /// Whether this extension implements [`SearchExtension::before_entries`].
  ///
  /// The engine only copies the catalog when some extension returns `true`.
  fn rewrites_entries(&self) -> bool {
    false
  }

  /// Called after a specific searcher has executed.
  fn after_searcher(&self, _query: &Query, _results: &mut Vec<CatalogMatch>) {}

  /// Called after the results have been merged and gated, before sorting.
  fn after_merge(&self, _query: &Query, _results: &mut Vec<CatalogMatch>) {}

  /// Called after the limit is applied.
  fn after_limit(&self, _query: &Query, _results: &mut Vec<CatalogMatch>) {}
}

/// Searches base product names instead of "name - cutting" variants.
///
/// Catalogs built from cart contents list a product once per cutting
/// instruction ("חזה עוף - פרוס", "חזה עוף - קוביות"). This extension strips
/// the instruction and keeps the first entry per name and category.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripVariantSuffix;

impl StripVariantSuffix {
  /// The name without its cutting instruction.
  pub fn base_name(name: &str) -> &str {
    match name.split_once(VARIANT_SEPARATOR) {
      Some((base, _)) => base,
      None => name,
    }
  }
}

impl SearchExtension for StripVariantSuffix {
  fn before_entries(&self, _query: &Query, entries: &mut Vec<CatalogEntry>) {
    let mut seen: Vec<(String, Option<String>)> = Vec::with_capacity(entries.len());
    entries.retain_mut(|entry| {
      let base = Self::base_name(&entry.name).to_string();
      let key = (base.clone(), entry.category.clone());
      if seen.contains(&key) {
        return false;
      }
      seen.push(key);
      entry.name = base;
      true
    });
  }

  fn rewrites_entries(&self) -> bool {
    true
  }
}
