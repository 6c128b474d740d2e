//! A `Searcher` implementation for typo-tolerant matching.

use crate::context::{Candidate, SearchContext};
use crate::prelude::*;
use crate::rules::reaches;
use crate::searchers::distance::{levenshtein_chars, max_distance_for, similarity_from_distance};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A searcher that scores names by Levenshtein distance to the query.
///
/// Similarity is `1 - distance / max(len(query), len(name))`, measured in
/// code points. Names containing the query are left to [`ExactSearch`].
///
/// The searcher returns every candidate whose similarity reaches the
/// context's floor, including ones beyond the query's `max_distance`; the
/// engine applies the inclusion rule and uses the rest for suggestions.
///
/// [`ExactSearch`]: crate::searchers::ExactSearch
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzySearch;

impl FuzzySearch {
  /// Creates a new `FuzzySearch`.
  pub fn new() -> Self {
    Self
  }

  /// Match a single candidate against the query.
  pub fn match_candidate(
    &self,
    context: &SearchContext<'_>,
    query_chars: &[char],
    candidate: &Candidate<'_>,
    max_distance: usize,
  ) -> Option<CatalogMatch> {
    if context.contains_query(candidate) {
      return None;
    }

    let longest = context.query_len.max(candidate.len);
    let cap = max_distance.max(max_distance_for(context.floor, longest));

    // Length-based pruning: the distance is at least the length gap.
    if context.query_len.abs_diff(candidate.len) > cap {
      return None;
    }

    let name_chars: Vec<char> = candidate.normalized.chars().collect();
    let distance = levenshtein_chars(query_chars, &name_chars, cap)?;
    let similarity = similarity_from_distance(distance, context.query_len, candidate.len);

    if !reaches(similarity, context.floor) {
      return None;
    }

    Some(CatalogMatch::new(
      candidate.id,
      candidate.entry.clone(),
      similarity,
      distance,
      context.scale.classify(similarity),
    ))
  }
}

impl Searcher for FuzzySearch {
  fn kind(&self) -> SearcherKind {
    SearcherKind::Fuzzy
  }

  fn search(&self, context: &SearchContext<'_>, query: &Query) -> Vec<CatalogMatch> {
    if context.is_vacant() {
      return Vec::new();
    }

    let query_chars: Vec<char> = context.query.chars().collect();
    let max_distance = query.options.max_distance;

    #[cfg(feature = "parallel")]
    let results: Vec<CatalogMatch> = context
      .candidates
      .par_iter()
      .filter_map(|candidate| self.match_candidate(context, &query_chars, candidate, max_distance))
      .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<CatalogMatch> = context
      .candidates
      .iter()
      .filter_map(|candidate| self.match_candidate(context, &query_chars, candidate, max_distance))
      .collect();

    results
  }
}
