//! JSON contract for exposing search over HTTP.
//!
//! The service layer owns routing and transport; this module only fixes the
//! request and response shapes and the glue between them.

use crate::catalog::CatalogProvider;
use crate::engine::CatalogSearchEngine;
use crate::filter::CategoryFilter;
use crate::types::{CatalogMatch, MatchType, Query, SearchOptions, SearchOutcome};
use serde::{Deserialize, Serialize};

/// Results returned when a request names no limit.
pub const DEFAULT_REQUEST_LIMIT: usize = 10;

/// Largest limit a request may ask for.
pub const MAX_REQUEST_LIMIT: usize = 100;

/// A search request as received from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
  /// Free-text query.
  pub query: String,
  /// Category to search in; absent, blank or the "all categories" label
  /// searches everything.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  /// Maximum number of results, clamped to `1..=100`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub limit: Option<usize>,
}

impl SearchRequest {
  /// Creates a request for `query` with no category and the default limit.
  pub fn new(query: impl Into<String>) -> Self {
    Self {
      query: query.into(),
      category: None,
      limit: None,
    }
  }

  /// Converts the request into a query on top of `defaults`.
  pub fn to_query(&self, defaults: &SearchOptions) -> Query {
    let limit = self
      .limit
      .unwrap_or(DEFAULT_REQUEST_LIMIT)
      .clamp(1, MAX_REQUEST_LIMIT);

    Query {
      text: self.query.clone(),
      options: SearchOptions {
        category: CategoryFilter::parse(self.category.as_deref()),
        limit: Some(limit),
        ..defaults.clone()
      },
    }
  }
}

/// One result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  pub similarity: f64,
  pub match_type: MatchType,
}

impl From<CatalogMatch> for SearchResultItem {
  fn from(m: CatalogMatch) -> Self {
    Self {
      name: m.entry.name,
      category: m.entry.category,
      similarity: m.similarity,
      match_type: m.match_type,
    }
  }
}

/// The response body for a search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
  pub results: Vec<SearchResultItem>,
  pub suggestions: Vec<String>,
  /// Number of entries in `results`.
  pub total_results: usize,
}

impl From<SearchOutcome> for SearchResponse {
  fn from(outcome: SearchOutcome) -> Self {
    let results: Vec<SearchResultItem> = outcome.matches.into_iter().map(Into::into).collect();
    Self {
      total_results: results.len(),
      results,
      suggestions: outcome.suggestions,
    }
  }
}

/// Answers `request` against the provider's current catalog.
pub fn handle_search<P>(
  engine: &CatalogSearchEngine,
  provider: &P,
  request: &SearchRequest,
) -> SearchResponse
where
  P: CatalogProvider + ?Sized,
{
  handle_search_with(engine, provider, request, &SearchOptions::default())
}

/// Like [`handle_search`], with service-wide default options.
pub fn handle_search_with<P>(
  engine: &CatalogSearchEngine,
  provider: &P,
  request: &SearchRequest,
  defaults: &SearchOptions,
) -> SearchResponse
where
  P: CatalogProvider + ?Sized,
{
  let query = request.to_query(defaults);
  engine.search(provider.entries(), &query).into()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::InMemCatalog;
  use serde_json::json;

  fn catalog() -> InMemCatalog {
    InMemCatalog::from_categories([
      ("עופות", vec!["עוף שלם", "חזה עוף", "כנפיים"]),
      ("דגים", vec!["סלמון", "טונה"]),
    ])
  }

  #[test]
  fn test_request_defaults_and_clamping() {
    let request: SearchRequest = serde_json::from_value(json!({ "query": "עוף" })).unwrap();
    let query = request.to_query(&SearchOptions::default());
    assert_eq!(query.options.limit, Some(DEFAULT_REQUEST_LIMIT));
    assert_eq!(query.options.category, CategoryFilter::Any);

    let request: SearchRequest =
      serde_json::from_value(json!({ "query": "עוף", "limit": 500, "category": "כל הקטגוריות" }))
        .unwrap();
    let query = request.to_query(&SearchOptions::default());
    assert_eq!(query.options.limit, Some(MAX_REQUEST_LIMIT));
    assert_eq!(query.options.category, CategoryFilter::Any);
  }

  #[test]
  fn test_response_shape() {
    let engine = CatalogSearchEngine::new();
    let request = SearchRequest {
      query: "עוף".to_string(),
      category: Some("עופות".to_string()),
      limit: Some(1),
    };

    let response = handle_search(&engine, &catalog(), &request);
    let body = serde_json::to_value(&response).unwrap();

    assert_eq!(
      body,
      json!({
        "results": [
          { "name": "חזה עוף", "category": "עופות", "similarity": 1.0, "matchType": "exact" }
        ],
        "suggestions": [],
        "totalResults": 1
      })
    );
  }

  #[test]
  fn test_suggestions_in_response() {
    let engine = CatalogSearchEngine::new();
    let response = handle_search(&engine, &catalog(), &SearchRequest::new("סלמן"));

    assert_eq!(response.total_results, 1);
    assert_eq!(response.results[0].match_type, MatchType::VeryClose);
    assert_eq!(response.suggestions, vec!["did you mean: 'סלמון'?"]);
  }
}
