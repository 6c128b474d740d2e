use zoares_search::prelude::*;

/// Matches names starting with the query's first word, scored by how much
/// of the name that word covers.
struct PrefixSearcher;

impl Searcher for PrefixSearcher {
  fn kind(&self) -> SearcherKind {
    SearcherKind::Custom
  }

  fn search(&self, context: &SearchContext<'_>, _query: &Query) -> Vec<CatalogMatch> {
    let first = match context.query.split(' ').next() {
      Some(word) if !word.is_empty() => word,
      _ => return Vec::new(),
    };
    let first_len = first.chars().count();

    context
      .candidates
      .iter()
      .filter(|c| c.normalized.starts_with(first))
      .map(|c| {
        let similarity = first_len as f64 / c.len as f64;
        CatalogMatch::new(
          c.id,
          c.entry.clone(),
          similarity,
          c.len - first_len,
          context.scale.classify(similarity),
        )
      })
      .collect()
  }
}

#[test]
fn test_custom_searcher() {
  let catalog = vec![
    CatalogEntry::with_category("המבורגר 160 גרם", "המבורגר הבית"),
    CatalogEntry::with_category("המבורגר 220 גרם", "המבורגר הבית"),
    CatalogEntry::with_category("המבור", "אחר"),
  ];

  let engine = CatalogSearchEngine::builder()
    .with(Box::new(PrefixSearcher))
    .build();

  // "המבור" covers 5 of 5 characters of the last entry, 5 of 15 of the others.
  let query = Query::builder()
    .text("המבור")
    .options(SearchOptions::default().max_distance(20).min_similarity(0.0))
    .build();
  let outcome = engine.search(&catalog, &query);

  assert_eq!(outcome.total(), 3);
  assert_eq!(outcome.matches[0].entry.name, "המבור");
  assert_eq!(outcome.matches[0].similarity, 1.0);
  assert_eq!(outcome.matches[1].entry.name, "המבורגר 160 גרם");
  assert_eq!(outcome.matches[2].entry.name, "המבורגר 220 גרם");
}

#[test]
fn test_custom_searcher_merges_with_standard_phases() {
  let catalog = vec![
    CatalogEntry::new("צלעות בקר"),
    CatalogEntry::new("צלעות"),
    CatalogEntry::new("צלי כתף"),
  ];

  let engine = CatalogSearchEngine::builder()
    .standard()
    .with(Box::new(PrefixSearcher))
    .build();

  let outcome = engine.search(&catalog, &Query::new("צלעות"));

  // The exact phase wins over the prefix searcher for the same entries.
  assert_eq!(outcome.names(), vec!["צלעות", "צלעות בקר"]);
  assert!(outcome.matches.iter().all(CatalogMatch::is_exact));
}
