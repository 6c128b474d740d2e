//! Typo-tolerant product catalog search.
//!
//! Given a free-text query and a catalog of product names (optionally scoped
//! to a category), the engine returns ranked matches with a similarity score
//! and a match-type label, plus "did you mean" suggestions when nothing
//! contains the query. Names are compared by code point, so Hebrew and other
//! right-to-left scripts measure the same as Latin text.
//!
//! ```rust
//! use zoares_search::prelude::*;
//!
//! let catalog = vec![CatalogEntry::new("שניצל עוף")];
//! let outcome = zoares_search::search("שניצל עיף", &catalog, SearchOptions::default());
//!
//! assert_eq!(outcome.matches[0].match_type, MatchType::VeryClose);
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod extension;
pub mod filter;
pub mod order;
pub mod rules;
pub mod searcher;
pub mod searchers;
pub mod suggest;
pub mod types;

pub use engine::search;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::catalog::*;
    pub use crate::context::*;
    pub use crate::engine::*;
    pub use crate::extension::*;
    pub use crate::filter::*;
    pub use crate::rules::*;
    pub use crate::searcher::*;
    pub use crate::searchers::*;
    pub use crate::types::*;
}
