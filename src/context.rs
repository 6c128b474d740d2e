//! Context provided to searchers during a search operation.

use crate::rules::SimilarityScale;
use crate::searchers::normalize::{char_len, normalize};
use crate::types::{CatalogEntry, EntryId, SearchOptions};

/// A catalog entry that survived category scoping, with its comparable form.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
  /// Position of the entry in the catalog slice passed to the engine.
  pub id: EntryId,
  /// The entry itself, borrowed from the caller.
  pub entry: &'a CatalogEntry,
  /// The normalized name.
  pub normalized: String,
  /// Normalized name length in code points.
  pub len: usize,
}

/// The view of one search that every `Searcher` receives.
///
/// Built once per call: the query and every candidate name are normalized up
/// front, and entries outside the requested category are already gone.
pub struct SearchContext<'a> {
  /// The normalized query text.
  pub query: String,
  /// Normalized query length in code points.
  pub query_len: usize,
  /// Candidates in catalog order.
  pub candidates: Vec<Candidate<'a>>,
  /// Cutoffs for labelling fuzzy matches.
  pub scale: &'a SimilarityScale,
  /// Lowest similarity anything downstream can use. Fuzzy searchers may
  /// drop candidates below it.
  pub floor: f64,
}

impl<'a> SearchContext<'a> {
  /// Creates a context scoped by `options.category`.
  pub fn new(
    entries: &'a [CatalogEntry],
    query: &str,
    options: &SearchOptions,
    scale: &'a SimilarityScale,
    floor: f64,
  ) -> Self {
    let query = normalize(query);
    let query_len = char_len(&query);

    let candidates = entries
      .iter()
      .enumerate()
      .filter(|(_, entry)| options.category.admits(entry))
      .map(|(id, entry)| {
        let normalized = normalize(&entry.name);
        let len = char_len(&normalized);
        Candidate {
          id,
          entry,
          normalized,
          len,
        }
      })
      .collect();

    Self {
      query,
      query_len,
      candidates,
      scale,
      floor,
    }
  }

  /// Whether there is nothing to search for or nothing to search in.
  pub fn is_vacant(&self) -> bool {
    self.query.is_empty() || self.candidates.is_empty()
  }

  /// Whether the candidate's name contains the query.
  pub fn contains_query(&self, candidate: &Candidate<'_>) -> bool {
    !self.query.is_empty() && candidate.normalized.contains(&self.query)
  }
}
