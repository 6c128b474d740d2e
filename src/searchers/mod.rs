//! The built-in `Searcher` implementations and their text utilities.
//!
//! # Available Searchers
//!
//! - [`ExactSearch`](crate::searchers::ExactSearch): names containing the query, scored `1.0`.
//! - [`FuzzySearch`](crate::searchers::FuzzySearch): Levenshtein-based matching for typos.
//!
//! # Example
//!
//! ```rust
//! use zoares_search::prelude::*;
//! use zoares_search::searchers::{ExactSearch, FuzzySearch};
//!
//! let engine = CatalogSearchEngine::builder()
//!     .with(Box::new(ExactSearch::new()))
//!     .with(Box::new(FuzzySearch::new()))
//!     .build();
//!
//! let catalog = vec![CatalogEntry::new("שניצל עוף")];
//! let outcome = engine.search(&catalog, &Query::new("שניצל עיף"));
//! assert_eq!(outcome.matches[0].match_type, MatchType::VeryClose);
//! ```

/// Levenshtein distance and similarity.
pub mod distance;
/// Substring matching.
pub mod exact;
/// Edit-distance matching.
pub mod fuzzy;
/// Normalization and tokenization shared by all searchers.
pub mod normalize;

pub use exact::ExactSearch;
pub use fuzzy::FuzzySearch;
