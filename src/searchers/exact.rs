//! A `Searcher` implementation for substring containment.

use crate::context::SearchContext;
use crate::prelude::*;

/// Matches every name that contains the query.
///
/// Containment, not equality: "עוף" is an exact hit for "עוף שלם". Exact
/// matches score `1.0` and bypass the similarity threshold.
/// Their distance is the number of characters the name adds around the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSearch;

impl ExactSearch {
  /// Creates a new `ExactSearch`.
  pub fn new() -> Self {
    Self
  }
}

impl Searcher for ExactSearch {
  fn kind(&self) -> SearcherKind {
    SearcherKind::Exact
  }

  fn search(&self, context: &SearchContext<'_>, _query: &Query) -> Vec<CatalogMatch> {
    if context.is_vacant() {
      return Vec::new();
    }

    context
      .candidates
      .iter()
      .filter(|candidate| context.contains_query(candidate))
      .map(|candidate| {
        CatalogMatch::new(
          candidate.id,
          candidate.entry.clone(),
          1.0,
          candidate.len - context.query_len,
          MatchType::Exact,
        )
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run(entries: &[CatalogEntry], text: &str) -> Vec<CatalogMatch> {
    let query = Query::new(text);
    let scale = SimilarityScale::default();
    let context = SearchContext::new(entries, &query.text, &query.options, &scale, 0.6);
    ExactSearch::new().search(&context, &query)
  }

  #[test]
  fn test_substring_is_exact() {
    let entries: Vec<CatalogEntry> = ["עוף שלם", "חזה עוף", "כנפיים"]
      .into_iter()
      .map(CatalogEntry::from)
      .collect();

    let matches = run(&entries, "עוף");
    let names: Vec<&str> = matches.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["עוף שלם", "חזה עוף"]);
    assert!(matches.iter().all(|m| m.similarity == 1.0 && m.is_exact()));
    assert_eq!(matches[0].distance, 4);
  }

  #[test]
  fn test_case_insensitive() {
    let entries = vec![CatalogEntry::new("Chicken Breast")];
    let matches = run(&entries, "BREAST");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].distance, 8);
  }

  #[test]
  fn test_empty_query_matches_nothing() {
    let entries = vec![CatalogEntry::new("טונה")];
    assert!(run(&entries, "").is_empty());
  }
}
