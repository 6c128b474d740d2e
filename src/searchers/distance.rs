//! Levenshtein edit distance and the similarity derived from it.
//!
//! All lengths are counted in code points so right-to-left scripts measure
//! the same as Latin text.

/// Minimum number of single-character insertions, deletions or
/// substitutions that turn `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  levenshtein_chars(&a, &b, usize::MAX).unwrap_or(usize::MAX)
}

/// Levenshtein distance, or `None` as soon as it is known to exceed `cap`.
pub fn bounded_levenshtein(a: &str, b: &str, cap: usize) -> Option<usize> {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  levenshtein_chars(&a, &b, cap)
}

/// Two-row dynamic program over code points.
///
/// The shorter string indexes the row so memory is `O(min(|a|, |b|))`.
/// Every cell in a row is a lower bound on the final distance, so once the
/// row minimum passes `cap` the result cannot come back under it.
pub fn levenshtein_chars(a: &[char], b: &[char], cap: usize) -> Option<usize> {
  let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

  if long.len() - short.len() > cap {
    return None;
  }
  if short.is_empty() {
    return Some(long.len());
  }

  let mut previous: Vec<usize> = (0..=short.len()).collect();
  let mut current = vec![0; short.len() + 1];

  for (i, lc) in long.iter().enumerate() {
    current[0] = i + 1;
    let mut row_min = current[0];

    for (j, sc) in short.iter().enumerate() {
      let substitution = previous[j] + usize::from(lc != sc);
      let deletion = previous[j + 1] + 1;
      let insertion = current[j] + 1;
      current[j + 1] = substitution.min(deletion).min(insertion);
      row_min = row_min.min(current[j + 1]);
    }

    if row_min > cap {
      return None;
    }
    std::mem::swap(&mut previous, &mut current);
  }

  let distance = previous[short.len()];
  (distance <= cap).then_some(distance)
}

/// `1 - distance / max(len_a, len_b)`, clamped to `[0, 1]`.
///
/// Two empty strings are identical, so their similarity is `1.0`.
pub fn similarity_from_distance(distance: usize, len_a: usize, len_b: usize) -> f64 {
  let longest = len_a.max(len_b);
  if longest == 0 {
    return 1.0;
  }
  (1.0 - distance as f64 / longest as f64).clamp(0.0, 1.0)
}

/// Similarity of two strings as they are; callers normalize first.
pub fn similarity(a: &str, b: &str) -> f64 {
  similarity_from_distance(levenshtein(a, b), a.chars().count(), b.chars().count())
}

/// The largest distance that still keeps similarity at or above `floor` for
/// strings whose longer side has `longest` code points.
pub fn max_distance_for(floor: f64, longest: usize) -> usize {
  let slack = (1.0 - floor.clamp(0.0, 1.0)) * longest as f64;
  (slack + crate::rules::SIMILARITY_EPSILON).floor() as usize
}
