//! Text normalization and tokenization.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Bring text to the comparable form used by every searcher.
///
/// Composes to NFC, lower-cases (a no-op for scripts without case such as
/// Hebrew), trims, and collapses runs of whitespace to a single space.
pub fn normalize(text: &str) -> String {
  let composed: String = text.nfc().collect();
  composed
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

/// Length in code points, the unit all distances and similarities use.
pub fn char_len(text: &str) -> usize {
  text.chars().count()
}

/// Tokenize text into normalized words.
pub fn tokenize(text: &str) -> Vec<String> {
  normalize(text)
    .unicode_words()
    .map(str::to_string)
    .collect()
}
