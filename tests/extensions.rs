use zoares_search::prelude::*;

struct QueryRewriteExt;

impl SearchExtension for QueryRewriteExt {
  fn before_query(&self, query: &mut Query) {
    if query.text.trim() == "פרגית" {
      query.text = "פרגיות".to_string();
    }
  }
}

struct ResultModifyExt;

impl SearchExtension for ResultModifyExt {
  fn after_limit(&self, _query: &Query, results: &mut Vec<CatalogMatch>) {
    for m in results {
      m.similarity = (m.similarity * 100.0).round() / 100.0; // Two decimals
    }
  }
}

struct AddEntryExt;

impl SearchExtension for AddEntryExt {
  fn before_entries(&self, _query: &Query, entries: &mut Vec<CatalogEntry>) {
    entries.push(CatalogEntry::with_category("מבצע השבוע", "אחר"));
  }

  fn rewrites_entries(&self) -> bool {
    true
  }
}

fn catalog() -> Vec<CatalogEntry> {
  vec![
    CatalogEntry::with_category("פרגיות", "עופות"),
    CatalogEntry::with_category("שניצל עוף", "עופות"),
    CatalogEntry::with_category("כנפיים", "עופות"),
  ]
}

#[test]
fn test_extensions() {
  let entries = catalog();

  let engine = CatalogSearchEngine::builder()
    .standard()
    .with_extension(Box::new(QueryRewriteExt))
    .with_extension(Box::new(ResultModifyExt))
    .with_extension(Box::new(AddEntryExt))
    .build();

  // "פרגית" is rewritten to "פרגיות", which is then an exact hit.
  let results = engine.search(&entries, &Query::new("פרגית"));
  assert_eq!(results.names(), vec!["פרגיות"]);
  assert!(results.matches[0].is_exact(), "Query rewrite failed");
  assert!(results.suggestions.is_empty());

  // 8/9 is rounded by the after_limit hook.
  let typo = engine.search(&entries, &Query::new("שניצל עיף"));
  assert_eq!(typo.names(), vec!["שניצל עוף"]);
  assert_eq!(typo.matches[0].similarity, 0.89, "Result modification failed");

  // Entries added by the extension are searchable, the caller's list is not touched.
  let added = engine.search(&entries, &Query::new("מבצע"));
  assert_eq!(added.names(), vec!["מבצע השבוע"], "Entry addition failed");
  assert_eq!(added.matches[0].id, entries.len());
  assert_eq!(entries.len(), 3);
}

#[test]
fn test_strip_variant_suffix() {
  let entries = vec![
    CatalogEntry::with_category("חזה עוף - פרוס", "עופות"),
    CatalogEntry::with_category("חזה עוף - קוביות", "עופות"),
    CatalogEntry::with_category("חזה עוף - שלם", "עופות"),
    CatalogEntry::with_category("כנפיים - שלם", "עופות"),
  ];

  let plain = CatalogSearchEngine::new().search(&entries, &Query::new("חזה עוף"));
  assert_eq!(plain.total(), 3);

  let engine = CatalogSearchEngine::builder()
    .standard()
    .with_extension(Box::new(StripVariantSuffix))
    .build();

  let outcome = engine.search(&entries, &Query::new("חזה עוף"));
  assert_eq!(outcome.names(), vec!["חזה עוף"]);
  assert_eq!(outcome.matches[0].distance, 0);

  // The cutting instruction no longer takes part in matching.
  let outcome = engine.search(&entries, &Query::new("קוביות"));
  assert!(outcome.is_empty());
}
