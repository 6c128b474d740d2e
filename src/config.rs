//! Engine configuration, loaded from JSON.
//!
//! Every section and every key is optional; anything missing takes the
//! built-in default.
//!
//! ```json
//! {
//!     "scale": { "very_close": 0.85 },
//!     "suggestions": { "max_similar": 5, "word_overlap": true },
//!     "options": { "max_distance": 3, "limit": 10 }
//! }
//! ```

use crate::engine::CatalogSearchEngine;
use crate::error::ConfigError;
use crate::extension::StripVariantSuffix;
use crate::rules::{SimilarityScale, SuggestionRules};
use crate::types::{Query, SearchOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`CatalogSearchEngine`] and its default options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
  /// Match-type cutoffs.
  #[serde(default)]
  pub scale: SimilarityScale,
  /// Suggestion cutoffs and wording.
  #[serde(default)]
  pub suggestions: SuggestionRules,
  /// Options applied to queries built with [`EngineConfig::query`].
  #[serde(default)]
  pub options: SearchOptions,
  /// Search base names instead of "name - cutting" variants.
  #[serde(default)]
  pub strip_variants: bool,
}

impl EngineConfig {
  /// Parses configuration from a JSON string.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(json)?)
  }

  /// Loads configuration from a JSON file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    let config = Self::from_json_str(&json)?;
    tracing::info!(path = %path.display(), "search config loaded");
    Ok(config)
  }

  /// Builds the standard engine with this configuration's rules.
  pub fn build_engine(&self) -> CatalogSearchEngine {
    let builder = CatalogSearchEngine::builder()
      .standard()
      .scale(self.scale.clone())
      .suggestions(self.suggestions.clone());

    if self.strip_variants {
      builder.with_extension(Box::new(StripVariantSuffix)).build()
    } else {
      builder.build()
    }
  }

  /// A query for `text` carrying the configured default options.
  pub fn query(&self, text: impl Into<String>) -> Query {
    Query {
      text: text.into(),
      options: self.options.clone(),
    }
  }
}
