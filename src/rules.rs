//! Tunable cutoffs for match classification and suggestions.
//!
//! Both rule sets deserialize with every field optional.

use crate::types::MatchType;
use serde::{Deserialize, Serialize};

/// Tolerance for comparing a computed similarity against a cutoff.
///
/// `1.0 - 1.0 / 5.0` must count as `0.8`.
pub const SIMILARITY_EPSILON: f64 = 1e-9;

/// Whether `similarity` reaches `cutoff`, within [`SIMILARITY_EPSILON`].
pub fn reaches(similarity: f64, cutoff: f64) -> bool {
    similarity + SIMILARITY_EPSILON >= cutoff
}

/// Similarity cutoffs that map a fuzzy similarity to a [`MatchType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScale {
    /// Lowest similarity labelled [`MatchType::VeryClose`].
    #[serde(default = "default_very_close")]
    pub very_close: f64,
    /// Lowest similarity labelled [`MatchType::Close`].
    #[serde(default = "default_close")]
    pub close: f64,
}

fn default_very_close() -> f64 {
    0.8
}

fn default_close() -> f64 {
    0.7
}

impl Default for SimilarityScale {
    fn default() -> Self {
        Self {
            very_close: default_very_close(),
            close: default_close(),
        }
    }
}

impl SimilarityScale {
    /// Create a scale with the default cutoffs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [`MatchType::VeryClose`] cutoff.
    pub fn very_close(mut self, cutoff: f64) -> Self {
        self.very_close = cutoff;
        self
    }

    /// Set the [`MatchType::Close`] cutoff.
    pub fn close(mut self, cutoff: f64) -> Self {
        self.close = cutoff;
        self
    }

    /// Label a fuzzy similarity.
    ///
    /// Anything under the `close` cutoff is `Partial`; whether such a match
    /// is kept at all is decided by the search's minimum similarity, not here.
    /// Fuzzy matches are never labelled `Exact`.
    pub fn classify(&self, similarity: f64) -> MatchType {
        if reaches(similarity, self.very_close) {
            MatchType::VeryClose
        } else if reaches(similarity, self.close) {
            MatchType::Close
        } else {
            MatchType::Partial
        }
    }
}

/// Rules for turning weak fuzzy matches into human-readable hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRules {
    /// The best fuzzy match is offered as "did you mean" from this similarity.
    #[serde(default = "default_did_you_mean")]
    pub did_you_mean: f64,
    /// Further fuzzy matches are listed as similar items from this similarity.
    #[serde(default = "default_similar")]
    pub similar: f64,
    /// How many names the similar-items line lists.
    #[serde(default = "default_max_similar")]
    pub max_similar: usize,
    /// Template for the "did you mean" line; `{name}` is replaced.
    #[serde(default = "default_did_you_mean_template")]
    pub did_you_mean_template: String,
    /// Template for the similar-items line; `{names}` is replaced.
    #[serde(default = "default_similar_template")]
    pub similar_template: String,
    /// When nothing is close enough to suggest, list names sharing a word
    /// with the query instead.
    #[serde(default)]
    pub word_overlap: bool,
    /// How many names the word-overlap fallback lists.
    #[serde(default = "default_max_related")]
    pub max_related: usize,
}

fn default_did_you_mean() -> f64 {
    0.7
}

fn default_similar() -> f64 {
    0.6
}

fn default_max_similar() -> usize {
    3
}

fn default_did_you_mean_template() -> String {
    "did you mean: '{name}'?".to_string()
}

fn default_similar_template() -> String {
    "similar items: {names}".to_string()
}

fn default_max_related() -> usize {
    5
}

impl Default for SuggestionRules {
    fn default() -> Self {
        Self {
            did_you_mean: default_did_you_mean(),
            similar: default_similar(),
            max_similar: default_max_similar(),
            did_you_mean_template: default_did_you_mean_template(),
            similar_template: default_similar_template(),
            word_overlap: false,
            max_related: default_max_related(),
        }
    }
}

impl SuggestionRules {
    /// Create rules with the default cutoffs and English templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules with the storefront's Hebrew wording.
    pub fn hebrew() -> Self {
        Self {
            did_you_mean_template: "האם התכוונת ל: {name}".to_string(),
            similar_template: "מוצרים דומים: {names}".to_string(),
            ..Self::default()
        }
    }

    /// Set the "did you mean" cutoff.
    pub fn did_you_mean(mut self, cutoff: f64) -> Self {
        self.did_you_mean = cutoff;
        self
    }

    /// Set the similar-items cutoff.
    pub fn similar(mut self, cutoff: f64) -> Self {
        self.similar = cutoff;
        self
    }

    /// Set how many names the similar-items line lists.
    pub fn max_similar(mut self, max: usize) -> Self {
        self.max_similar = max;
        self
    }

    /// Enable or disable the word-overlap fallback.
    pub fn word_overlap(mut self, enabled: bool) -> Self {
        self.word_overlap = enabled;
        self
    }

    /// The lowest similarity any suggestion can use.
    pub fn floor(&self) -> f64 {
        self.did_you_mean.min(self.similar)
    }

    /// Render the "did you mean" line for `name`.
    pub fn render_did_you_mean(&self, name: &str) -> String {
        self.did_you_mean_template.replace("{name}", name)
    }

    /// Render the similar-items line for `names`.
    pub fn render_similar(&self, names: &[&str]) -> String {
        self.similar_template.replace("{names}", &names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let scale = SimilarityScale::default();
        assert_eq!(scale.classify(1.0 - 1.0 / 5.0), MatchType::VeryClose);
        assert_eq!(scale.classify(0.79), MatchType::Close);
        assert_eq!(scale.classify(1.0 - 3.0 / 10.0), MatchType::Close);
        assert_eq!(scale.classify(0.69), MatchType::Partial);
        assert_eq!(scale.classify(0.2), MatchType::Partial);
    }

    #[test]
    fn test_custom_scale() {
        let scale = SimilarityScale::new().very_close(0.9).close(0.75);
        assert_eq!(scale.classify(0.85), MatchType::Close);
        assert_eq!(scale.classify(0.92), MatchType::VeryClose);
    }

    #[test]
    fn test_render_templates() {
        let rules = SuggestionRules::default();
        assert_eq!(rules.render_did_you_mean("סלמון"), "did you mean: 'סלמון'?");
        assert_eq!(
            rules.render_similar(&["טונה", "מושט"]),
            "similar items: טונה, מושט"
        );
        assert_eq!(
            SuggestionRules::hebrew().render_did_you_mean("טונה"),
            "האם התכוונת ל: טונה"
        );
    }

    #[test]
    fn test_partial_rules_deserialize() {
        let rules: SuggestionRules = serde_json::from_str(r#"{"max_similar": 5}"#).unwrap();
        assert_eq!(rules.max_similar, 5);
        assert_eq!(rules.did_you_mean, 0.7);
        assert!(!rules.word_overlap);
    }
}
