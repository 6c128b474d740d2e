//! Core data types for catalog search.

use crate::filter::CategoryFilter;
use serde::{Deserialize, Deserializer, Serialize};

/// Default edit-distance tolerance for fuzzy matches.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Default minimum similarity a fuzzy match must reach.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.6;

/// Position of an entry in the catalog slice handed to the engine.
///
/// Ids are only meaningful for the duration of one search call.
pub type EntryId = usize;

/// A searchable product name, optionally tagged with its category.
///
/// Entries are owned by the catalog collaborator and borrowed read-only by
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
  /// The product name as displayed to customers.
  pub name: String,
  /// The category the product is listed under, if any.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
}

impl CatalogEntry {
  /// Creates an uncategorized entry.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      category: None,
    }
  }

  /// Creates an entry listed under `category`.
  pub fn with_category(name: impl Into<String>, category: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      category: Some(category.into()),
    }
  }
}

impl From<&str> for CatalogEntry {
  fn from(name: &str) -> Self {
    Self::new(name)
  }
}

impl From<String> for CatalogEntry {
  fn from(name: String) -> Self {
    Self::new(name)
  }
}

/// Categorical label summarizing how well an entry matched.
///
/// Variants are declared from strongest to weakest, so the derived ordering
/// ranks `Exact` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
  /// The query is contained in the name.
  Exact,
  /// High similarity, typically a single typo.
  VeryClose,
  /// Moderate similarity.
  Close,
  /// Weak similarity that still passed the configured threshold.
  Partial,
}

impl MatchType {
  /// The wire name of this match type.
  pub fn as_str(&self) -> &'static str {
    match self {
      MatchType::Exact => "exact",
      MatchType::VeryClose => "very_close",
      MatchType::Close => "close",
      MatchType::Partial => "partial",
    }
  }
}

impl std::fmt::Display for MatchType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMatch {
  /// Position of the entry in the full catalog slice passed to the engine,
  /// counted before category scoping.
  pub id: EntryId,
  /// The matched catalog entry.
  pub entry: CatalogEntry,
  /// Similarity in `[0, 1]`; exactly `1.0` for substring matches.
  pub similarity: f64,
  /// Levenshtein distance between the normalized query and name.
  pub distance: usize,
  /// Display label derived from the similarity.
  pub match_type: MatchType,
}

impl CatalogMatch {
  /// Creates a match for the entry at `id`.
  pub fn new(
    id: EntryId,
    entry: CatalogEntry,
    similarity: f64,
    distance: usize,
    match_type: MatchType,
  ) -> Self {
    Self {
      id,
      entry,
      similarity,
      distance,
      match_type,
    }
  }

  /// The matched product name.
  pub fn name(&self) -> &str {
    &self.entry.name
  }

  /// Whether this match came from the substring phase.
  pub fn is_exact(&self) -> bool {
    self.match_type == MatchType::Exact
  }
}

/// The result of one search call: ranked matches plus suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
  /// Matches sorted by descending similarity with deterministic tie-breaks.
  pub matches: Vec<CatalogMatch>,
  /// Human-readable "did you mean" hints. Empty when there is an exact hit
  /// or nothing close enough to suggest.
  pub suggestions: Vec<String>,
}

impl SearchOutcome {
  /// An outcome with no matches and no suggestions.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Number of matches returned.
  pub fn total(&self) -> usize {
    self.matches.len()
  }

  /// Whether there are neither matches nor suggestions.
  pub fn is_empty(&self) -> bool {
    self.matches.is_empty() && self.suggestions.is_empty()
  }

  /// The matched names, in rank order.
  pub fn names(&self) -> Vec<&str> {
    self.matches.iter().map(CatalogMatch::name).collect()
  }
}

/// A search query: free text plus the options controlling the match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
  /// The user's free-text query. May be empty.
  pub text: String,
  /// Tolerances, scoping and limits for this search.
  #[serde(default)]
  pub options: SearchOptions,
}

impl Query {
  /// Creates a query with default options.
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      options: SearchOptions::default(),
    }
  }

  /// Creates a new `QueryBuilder` to construct a `Query` in a chained manner.
  pub fn builder() -> QueryBuilder {
    QueryBuilder::default()
  }
}

/// A builder for creating `Query` instances.
#[derive(Debug, Default)]
pub struct QueryBuilder {
  text: String,
  options: SearchOptions,
}

impl QueryBuilder {
  /// Sets the query text.
  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = text.into();
    self
  }

  /// Replaces all search options.
  pub fn options(mut self, options: SearchOptions) -> Self {
    self.options = options;
    self
  }

  /// Restricts the search to one category.
  pub fn category(mut self, category: impl Into<String>) -> Self {
    self.options.category = CategoryFilter::only(category);
    self
  }

  /// Caps the number of returned matches.
  pub fn limit(mut self, limit: usize) -> Self {
    self.options.limit = Some(limit);
    self
  }

  /// Builds the final `Query` object.
  pub fn build(self) -> Query {
    Query {
      text: self.text,
      options: self.options,
    }
  }
}

/// Options controlling a single search.
///
/// Out-of-range values are never rejected; the engine clamps them through
/// [`SearchOptions::sanitized`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
  /// Maximum edit distance for a fuzzy match to be included.
  /// Negative values in serialized input fall back to the default.
  #[serde(default = "default_max_distance", deserialize_with = "lenient_distance")]
  pub max_distance: usize,
  /// Minimum similarity for a fuzzy match to be included. Substring
  /// matches bypass this threshold.
  #[serde(default = "default_min_similarity")]
  pub min_similarity: f64,
  /// Restricts candidates to a single category before matching.
  #[serde(default)]
  pub category: CategoryFilter,
  /// Maximum number of matches to return. `None` returns all of them.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub limit: Option<usize>,
}

fn default_max_distance() -> usize {
  DEFAULT_MAX_DISTANCE
}

fn default_min_similarity() -> f64 {
  DEFAULT_MIN_SIMILARITY
}

fn lenient_distance<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = i64::deserialize(deserializer)?;
  if raw < 0 {
    tracing::warn!(max_distance = raw, "negative max_distance, using default");
    return Ok(DEFAULT_MAX_DISTANCE);
  }
  Ok(usize::try_from(raw).unwrap_or(usize::MAX))
}

impl Default for SearchOptions {
  fn default() -> Self {
    Self {
      max_distance: DEFAULT_MAX_DISTANCE,
      min_similarity: DEFAULT_MIN_SIMILARITY,
      category: CategoryFilter::Any,
      limit: None,
    }
  }
}

impl SearchOptions {
  /// Sets the maximum edit distance.
  pub fn max_distance(mut self, max_distance: usize) -> Self {
    self.max_distance = max_distance;
    self
  }

  /// Sets the minimum similarity threshold.
  pub fn min_similarity(mut self, min_similarity: f64) -> Self {
    self.min_similarity = min_similarity;
    self
  }

  /// Sets the category filter.
  pub fn category(mut self, category: CategoryFilter) -> Self {
    self.category = category;
    self
  }

  /// Sets the result limit.
  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Returns a copy with every field pulled back into its valid range.
  ///
  /// A similarity threshold outside `[0, 1]` is clamped to the nearest bound
  /// and a NaN threshold becomes the default. A limit of zero is kept: it
  /// asks for no matches.
  pub fn sanitized(&self) -> Self {
    let mut options = self.clone();

    if options.min_similarity.is_nan() {
      tracing::warn!("min_similarity is NaN, using default");
      options.min_similarity = DEFAULT_MIN_SIMILARITY;
    } else if !(0.0..=1.0).contains(&options.min_similarity) {
      let clamped = options.min_similarity.clamp(0.0, 1.0);
      tracing::warn!(
        min_similarity = options.min_similarity,
        clamped,
        "min_similarity out of range"
      );
      options.min_similarity = clamped;
    }

    options
  }
}

/// An enumeration of the searcher phases the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearcherKind {
  /// Substring containment.
  Exact,
  /// Edit-distance matching.
  Fuzzy,
  /// A placeholder for custom, user-defined searchers.
  Custom,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_options_deserialize_defaults() {
    let options: SearchOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, SearchOptions::default());
  }

  #[test]
  fn test_negative_distance_falls_back() {
    let options: SearchOptions = serde_json::from_str(r#"{"max_distance": -4}"#).unwrap();
    assert_eq!(options.max_distance, DEFAULT_MAX_DISTANCE);
  }

  #[test]
  fn test_sanitized_clamps_similarity() {
    let high = SearchOptions::default().min_similarity(1.7).sanitized();
    assert_eq!(high.min_similarity, 1.0);

    let low = SearchOptions::default().min_similarity(-0.2).sanitized();
    assert_eq!(low.min_similarity, 0.0);

    let nan = SearchOptions::default().min_similarity(f64::NAN).sanitized();
    assert_eq!(nan.min_similarity, DEFAULT_MIN_SIMILARITY);
  }

  #[test]
  fn test_sanitized_keeps_zero_limit() {
    let options = SearchOptions::default().limit(0).sanitized();
    assert_eq!(options.limit, Some(0));
  }

  #[test]
  fn test_match_type_wire_names() {
    assert_eq!(serde_json::to_string(&MatchType::VeryClose).unwrap(), "\"very_close\"");
    assert_eq!(MatchType::Partial.to_string(), "partial");
    assert!(MatchType::Exact < MatchType::Partial);
  }

  #[test]
  fn test_query_builder() {
    let query = Query::builder().text("עוף").category("עופות").limit(5).build();
    assert_eq!(query.text, "עוף");
    assert_eq!(query.options.limit, Some(5));
    assert_eq!(query.options.category, CategoryFilter::only("עופות"));
  }
}
