//! Category scoping for searches.
//!
//! A search can be restricted to a single category before any matching
//! happens. The storefront sends a sentinel label when the customer has not
//! picked a category; that label, like a blank string, means "no filter".

use crate::types::CatalogEntry;
use serde::{Deserialize, Serialize};

/// The label the storefront uses for "all categories".
pub const ALL_CATEGORIES: &str = "כל הקטגוריות";

/// Which catalog entries a search may consider.
///
/// Serializes as an optional category name, so `null` and a missing field
/// both mean [`CategoryFilter::Any`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum CategoryFilter {
  /// Every entry is a candidate.
  #[default]
  Any,
  /// Only entries whose category equals this name are candidates.
  Only(String),
}

impl CategoryFilter {
  /// Restricts to `category`, unless it is blank or the "all" sentinel.
  pub fn only(category: impl Into<String>) -> Self {
    let category = category.into();
    let trimmed = category.trim();
    if trimmed.is_empty() || trimmed == ALL_CATEGORIES {
      CategoryFilter::Any
    } else {
      CategoryFilter::Only(trimmed.to_string())
    }
  }

  /// Builds a filter from an optional request parameter.
  pub fn parse(category: Option<&str>) -> Self {
    match category {
      Some(category) => Self::only(category),
      None => CategoryFilter::Any,
    }
  }

  /// Whether `entry` passes this filter.
  ///
  /// Uncategorized entries only pass [`CategoryFilter::Any`]. The entry's
  /// category is trimmed the same way the filter's is.
  pub fn admits(&self, entry: &CatalogEntry) -> bool {
    match self {
      CategoryFilter::Any => true,
      CategoryFilter::Only(category) => {
        entry.category.as_deref().map(str::trim) == Some(category.as_str())
      }
    }
  }

  /// The category name, if this filter restricts to one.
  pub fn as_category(&self) -> Option<&str> {
    match self {
      CategoryFilter::Any => None,
      CategoryFilter::Only(category) => Some(category),
    }
  }
}

impl From<Option<String>> for CategoryFilter {
  fn from(category: Option<String>) -> Self {
    match category {
      Some(category) => Self::only(category),
      None => CategoryFilter::Any,
    }
  }
}

impl From<CategoryFilter> for Option<String> {
  fn from(filter: CategoryFilter) -> Self {
    match filter {
      CategoryFilter::Any => None,
      CategoryFilter::Only(category) => Some(category),
    }
  }
}
