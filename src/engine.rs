//! The search engine that coordinates the search phases.

use crate::context::SearchContext;
use crate::extension::SearchExtension;
use crate::rules::{reaches, SimilarityScale, SuggestionRules};
use crate::searcher::Searcher;
use crate::searchers::normalize::{char_len, normalize};
use crate::searchers::{ExactSearch, FuzzySearch};
use crate::suggest::{related_by_words, suggest};
use crate::types::{CatalogEntry, CatalogMatch, EntryId, Query, SearchOptions, SearchOutcome};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Maps a free-text query over a catalog to ranked matches and suggestions.
///
/// The engine is a pure function of its inputs: it owns no catalog, keeps
/// no state between calls and never fails. Empty queries and empty catalogs
/// produce an empty [`SearchOutcome`]; out-of-range options are clamped.
///
/// Create a standard engine with [`CatalogSearchEngine::new`], or assemble
/// one with [`CatalogSearchEngineBuilder`].
///
/// # Examples
///
/// ```rust
/// use zoares_search::prelude::*;
///
/// let catalog = vec![
///     CatalogEntry::with_category("עוף שלם", "עופות"),
///     CatalogEntry::with_category("חזה עוף", "עופות"),
///     CatalogEntry::with_category("כנפיים", "עופות"),
/// ];
///
/// let engine = CatalogSearchEngine::new();
/// let outcome = engine.search(&catalog, &Query::new("עוף"));
///
/// assert_eq!(outcome.names(), vec!["חזה עוף", "עוף שלם"]);
/// assert!(outcome.matches.iter().all(|m| m.match_type == MatchType::Exact));
/// assert!(outcome.suggestions.is_empty());
/// ```
pub struct CatalogSearchEngine {
  /// The registered search phases, run in order.
  searchers: Vec<Box<dyn Searcher>>,
  /// Cutoffs for labelling fuzzy matches.
  scale: SimilarityScale,
  /// Cutoffs and wording for suggestions.
  suggestions: SuggestionRules,
  /// Lifecycle hooks.
  extensions: Vec<Box<dyn SearchExtension>>,
}

impl Default for CatalogSearchEngine {
  fn default() -> Self {
    Self::new()
  }
}

impl CatalogSearchEngine {
  /// Creates an engine running the exact and fuzzy phases with default rules.
  pub fn new() -> Self {
    Self::builder().standard().build()
  }

  /// Creates a new `CatalogSearchEngineBuilder` to construct an engine.
  pub fn builder() -> CatalogSearchEngineBuilder {
    CatalogSearchEngineBuilder::new()
  }

  /// The scale used to label fuzzy matches.
  pub fn scale(&self) -> &SimilarityScale {
    &self.scale
  }

  /// The rules used to build suggestions.
  pub fn suggestion_rules(&self) -> &SuggestionRules {
    &self.suggestions
  }

  /// Searches `catalog` for `query`.
  ///
  /// ## Search Lifecycle
  ///
  /// 1.  **`before_query` Hook**: extensions may rewrite the query.
  /// 2.  **Option clamping**: out-of-range options are pulled into range.
  /// 3.  **`before_entries` Hook**: extensions may reshape a copy of the catalog.
  /// 4.  **Scoping**: entries outside the category filter are dropped and
  ///     every remaining name is normalized.
  /// 5.  **Search phases**: every searcher runs; `after_searcher` sees each
  ///     result list. Matches are merged per entry, keeping the strongest.
  /// 6.  **Suggestions**: when no exact match exists, the ranked fuzzy
  ///     candidates produce "did you mean" lines.
  /// 7.  **Gating**: fuzzy matches beyond `max_distance` or under
  ///     `min_similarity` are dropped; exact matches always stay.
  /// 8.  **`after_merge` Hook**, then sorting by [`compare_ranked`].
  /// 9.  **Limit** (a limit of zero returns no matches), then the
  ///     **`after_limit` Hook**.
  pub fn search(&self, catalog: &[CatalogEntry], query: &Query) -> SearchOutcome {
    let mut query = query.clone();

    // Hook: before_query
    for ext in &self.extensions {
      ext.before_query(&mut query);
    }

    query.options = query.options.sanitized();

    let rewritten = if self.extensions.iter().any(|ext| ext.rewrites_entries()) {
      let mut entries = catalog.to_vec();
      for ext in &self.extensions {
        ext.before_entries(&query, &mut entries);
      }
      Some(entries)
    } else {
      None
    };
    let entries = rewritten.as_deref().unwrap_or(catalog);

    if self.searchers.is_empty() {
      return SearchOutcome::empty();
    }

    let floor = query.options.min_similarity.min(self.suggestions.floor());
    let context = SearchContext::new(entries, &query.text, &query.options, &self.scale, floor);
    if context.is_vacant() {
      tracing::debug!(
        query_len = context.query_len,
        candidates = context.candidates.len(),
        "nothing to search"
      );
      return SearchOutcome::empty();
    }

    let mut merged: BTreeMap<EntryId, CatalogMatch> = BTreeMap::new();
    for searcher in &self.searchers {
      let mut results = searcher.search(&context, &query);

      // Hook: after_searcher
      for ext in &self.extensions {
        ext.after_searcher(&query, &mut results);
      }

      tracing::trace!(kind = ?searcher.kind(), hits = results.len(), "searcher finished");
      for m in results {
        Self::merge_into(&mut merged, m);
      }
    }

    let mut ranked: Vec<CatalogMatch> = merged.into_values().collect();
    ranked.sort_by(compare_ranked);

    let suggestions = if ranked.iter().any(CatalogMatch::is_exact) {
      Vec::new()
    } else {
      self.suggest(&context, &ranked)
    };

    let mut matches: Vec<CatalogMatch> = ranked
      .into_iter()
      .filter(|m| admits(&query.options, m))
      .collect();

    // Hook: after_merge
    for ext in &self.extensions {
      ext.after_merge(&query, &mut matches);
    }

    matches.sort_by(compare_ranked);

    if let Some(limit) = query.options.limit {
      matches.truncate(limit);
    }

    // Hook: after_limit
    for ext in &self.extensions {
      ext.after_limit(&query, &mut matches);
    }

    tracing::debug!(
      query_len = context.query_len,
      candidates = context.candidates.len(),
      matches = matches.len(),
      suggestions = suggestions.len(),
      "catalog search"
    );

    SearchOutcome {
      matches,
      suggestions,
    }
  }

  /// Keeps the stronger of two matches for the same entry.
  fn merge_into(merged: &mut BTreeMap<EntryId, CatalogMatch>, m: CatalogMatch) {
    match merged.get_mut(&m.id) {
      Some(existing) => {
        if compare_ranked(&m, existing) == Ordering::Less {
          *existing = m;
        }
      }
      None => {
        merged.insert(m.id, m);
      }
    }
  }

  fn suggest(&self, context: &SearchContext<'_>, ranked: &[CatalogMatch]) -> Vec<String> {
    let mut lines = suggest(ranked, &self.suggestions);
    if lines.is_empty() && self.suggestions.word_overlap {
      lines.extend(related_by_words(context, &self.suggestions));
    }
    lines
  }
}

/// Whether a match passes the inclusion rule of `options`.
///
/// Exact matches bypass both thresholds.
pub fn admits(options: &SearchOptions, m: &CatalogMatch) -> bool {
  m.is_exact() || (m.distance <= options.max_distance && reaches(m.similarity, options.min_similarity))
}

/// Total order on matches: best first.
///
/// Higher similarity first, then exact before fuzzy, then smaller edit
/// distance, then the shorter name, then code-point order of the name, and
/// finally catalog position.
///
/// Distance and name length are both measured on the normalized name, so
/// "ab   x" counts as four code points, like "ab x".
pub fn compare_ranked(a: &CatalogMatch, b: &CatalogMatch) -> Ordering {
  b.similarity
    .partial_cmp(&a.similarity)
    .unwrap_or(Ordering::Equal)
    .then_with(|| b.is_exact().cmp(&a.is_exact()))
    .then_with(|| a.distance.cmp(&b.distance))
    .then_with(|| normalized_len(a).cmp(&normalized_len(b)))
    .then_with(|| a.name().cmp(b.name()))
    .then_with(|| a.id.cmp(&b.id))
}

fn normalized_len(m: &CatalogMatch) -> usize {
  char_len(&normalize(m.name()))
}

/// Searches `catalog` for `query` with the standard engine.
///
/// This is the one-call form for callers that do not need custom rules:
///
/// ```rust
/// use zoares_search::prelude::*;
///
/// let catalog = vec![CatalogEntry::new("סלמון"), CatalogEntry::new("טונה")];
/// let outcome = zoares_search::search("סלמן", &catalog, SearchOptions::default());
///
/// assert_eq!(outcome.suggestions, vec!["did you mean: 'סלמון'?"]);
/// ```
pub fn search(query: &str, catalog: &[CatalogEntry], options: SearchOptions) -> SearchOutcome {
  let query = Query {
    text: query.to_string(),
    options,
  };
  CatalogSearchEngine::new().search(catalog, &query)
}

/// A builder for creating `CatalogSearchEngine` instances.
#[derive(Default)]
pub struct CatalogSearchEngineBuilder {
  searchers: Vec<Box<dyn Searcher>>,
  scale: Option<SimilarityScale>,
  suggestions: Option<SuggestionRules>,
  extensions: Vec<Box<dyn SearchExtension>>,
}

impl CatalogSearchEngineBuilder {
  /// Creates a new, empty `CatalogSearchEngineBuilder`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers the exact and fuzzy phases.
  pub fn standard(self) -> Self {
    self
      .with(Box::new(ExactSearch::new()))
      .with(Box::new(FuzzySearch::new()))
  }

  /// Adds a search phase to the engine.
  pub fn with(mut self, searcher: Box<dyn Searcher>) -> Self {
    self.searchers.push(searcher);
    self
  }

  /// Sets the similarity scale.
  pub fn scale(mut self, scale: SimilarityScale) -> Self {
    self.scale = Some(scale);
    self
  }

  /// Sets the suggestion rules.
  pub fn suggestions(mut self, rules: SuggestionRules) -> Self {
    self.suggestions = Some(rules);
    self
  }

  /// Adds an extension to the engine.
  pub fn with_extension(mut self, extension: Box<dyn SearchExtension>) -> Self {
    self.extensions.push(extension);
    self
  }

  /// Builds the `CatalogSearchEngine` with the configured components.
  pub fn build(self) -> CatalogSearchEngine {
    CatalogSearchEngine {
      searchers: self.searchers,
      scale: self.scale.unwrap_or_default(),
      suggestions: self.suggestions.unwrap_or_default(),
      extensions: self.extensions,
    }
  }
}
