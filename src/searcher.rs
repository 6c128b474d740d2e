//! The `Searcher` trait, which defines the interface for search phases.

use crate::context::SearchContext;
use crate::types::{CatalogMatch, Query, SearcherKind};

/// A trait for one phase of a catalog search.
///
/// The engine runs every registered searcher over the same
/// [`SearchContext`], merges their matches by entry (keeping the strongest
/// match per entry) and applies the inclusion thresholds afterwards. A
/// searcher may therefore return weaker candidates than the query admits;
/// they still feed suggestion generation.
///
/// The `Send` and `Sync` bounds are required to allow an engine to be
/// shared across request handlers.
pub trait Searcher: Send + Sync {
  /// Returns the `SearcherKind` of this searcher.
  fn kind(&self) -> SearcherKind;

  /// Scores the context's candidates against its normalized query.
  ///
  /// # Arguments
  ///
  /// * `context` - The scoped, normalized candidates and the normalized query.
  /// * `query` - The original query, for searchers that need the raw options.
  ///
  /// # Returns
  ///
  /// Matches in any order. Similarities must lie in `[0, 1]`.
  fn search(&self, context: &SearchContext<'_>, query: &Query) -> Vec<CatalogMatch>;
}
