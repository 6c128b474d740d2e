//! "Did you mean" generation.
//!
//! Suggestions only exist when the substring phase found nothing. They are
//! built from the ranked fuzzy candidates, which may include names the
//! search itself did not admit (too many edits for `max_distance`).

use crate::context::SearchContext;
use crate::rules::{reaches, SuggestionRules};
use crate::searchers::normalize::{char_len, tokenize};
use crate::types::CatalogMatch;

/// Query words shorter than this do not drive the word-overlap fallback.
const MIN_OVERLAP_WORD: usize = 2;

/// Build suggestion lines from fuzzy matches sorted best first.
///
/// The best match becomes "did you mean" when it reaches
/// `rules.did_you_mean`. Up to `rules.max_similar` further names reaching
/// `rules.similar` form a second line. Returns an empty list when nothing
/// qualifies.
pub fn suggest(ranked: &[CatalogMatch], rules: &SuggestionRules) -> Vec<String> {
  let mut lines = Vec::new();
  let mut offered: Option<&str> = None;

  if let Some(best) = ranked.first() {
    if !best.is_exact() && reaches(best.similarity, rules.did_you_mean) {
      lines.push(rules.render_did_you_mean(best.name()));
      offered = Some(best.name());
    }
  }

  let mut similar: Vec<&str> = Vec::new();
  for m in ranked {
    if similar.len() >= rules.max_similar {
      break;
    }
    if m.is_exact() || !reaches(m.similarity, rules.similar) {
      continue;
    }
    let name = m.name();
    if offered == Some(name) || similar.contains(&name) {
      continue;
    }
    similar.push(name);
  }

  if !similar.is_empty() {
    lines.push(rules.render_similar(&similar));
  }

  lines
}

/// Names sharing a word with the query, as one similar-items line.
///
/// Used only when [`SuggestionRules::word_overlap`] is enabled and the
/// fuzzy suggestions came back empty.
pub fn related_by_words(context: &SearchContext<'_>, rules: &SuggestionRules) -> Option<String> {
  let words: Vec<String> = tokenize(&context.query)
    .into_iter()
    .filter(|word| char_len(word) >= MIN_OVERLAP_WORD)
    .collect();
  if words.is_empty() || rules.max_related == 0 {
    return None;
  }

  let mut related: Vec<&str> = Vec::new();
  for candidate in &context.candidates {
    if related.len() >= rules.max_related {
      break;
    }
    let name = candidate.entry.name.as_str();
    if related.contains(&name) {
      continue;
    }
    if words.iter().any(|word| candidate.normalized.contains(word.as_str())) {
      related.push(name);
    }
  }

  if related.is_empty() {
    None
  } else {
    Some(rules.render_similar(&related))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rules::SimilarityScale;
  use crate::types::{CatalogEntry, MatchType, SearchOptions};

  fn fuzzy(id: usize, name: &str, similarity: f64) -> CatalogMatch {
    CatalogMatch::new(id, CatalogEntry::new(name), similarity, 1, MatchType::Partial)
  }

  #[test]
  fn test_did_you_mean_only() {
    let ranked = vec![fuzzy(0, "סלמון", 0.8)];
    assert_eq!(
      suggest(&ranked, &SuggestionRules::default()),
      vec!["did you mean: 'סלמון'?".to_string()]
    );
  }

  #[test]
  fn test_did_you_mean_and_similar() {
    let ranked = vec![
      fuzzy(0, "a", 0.9),
      fuzzy(1, "b", 0.75),
      fuzzy(2, "c", 0.65),
      fuzzy(3, "d", 0.62),
      fuzzy(4, "e", 0.61),
      fuzzy(5, "f", 0.5),
    ];
    let lines = suggest(&ranked, &SuggestionRules::default());
    assert_eq!(lines, vec!["did you mean: 'a'?", "similar items: b, c, d"]);
  }

  #[test]
  fn test_similar_without_did_you_mean() {
    let ranked = vec![fuzzy(0, "a", 0.65), fuzzy(1, "b", 0.6)];
    let lines = suggest(&ranked, &SuggestionRules::default());
    assert_eq!(lines, vec!["similar items: a, b"]);
  }

  #[test]
  fn test_nothing_close_enough() {
    let ranked = vec![fuzzy(0, "a", 0.5)];
    assert!(suggest(&ranked, &SuggestionRules::default()).is_empty());
    assert!(suggest(&[], &SuggestionRules::default()).is_empty());
  }

  #[test]
  fn test_duplicate_names_listed_once() {
    let ranked = vec![fuzzy(0, "a", 0.9), fuzzy(1, "a", 0.9), fuzzy(2, "b", 0.7), fuzzy(3, "b", 0.7)];
    let lines = suggest(&ranked, &SuggestionRules::default());
    assert_eq!(lines, vec!["did you mean: 'a'?", "similar items: b"]);
  }

  #[test]
  fn test_related_by_words() {
    let entries = vec![
      CatalogEntry::new("נקניקיות עוף"),
      CatalogEntry::new("נקניקיות חריפות (מרגז)"),
      CatalogEntry::new("טונה"),
    ];
    let scale = SimilarityScale::default();
    let options = SearchOptions::default();
    let context = SearchContext::new(&entries, "נקניקיות בקר טריות", &options, &scale, 0.6);

    let line = related_by_words(&context, &SuggestionRules::default());
    assert_eq!(
      line.as_deref(),
      Some("similar items: נקניקיות עוף, נקניקיות חריפות (מרגז)")
    );
  }
}
