//! The fuzzy-matching primitive.
//!
//! Ranking and aggregation in [`crate::index`] only ever see a normalized
//! distance in `[0, 1]`, so the underlying string metric can be swapped
//! without touching scoring logic. The default implementation wraps
//! `strsim`'s normalized Levenshtein distance.

/// A normalized approximate string-distance measure.
///
/// Implementations must return a value in `[0, 1]` where `0.0` means the
/// strings are identical and `1.0` means they share nothing.
pub trait FuzzyMatcher: Send + Sync {
    /// Normalized distance between `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> f64;
}

/// Levenshtein edit distance scaled by the longer string's length.
///
/// Operates on characters, not bytes, so Hangul syllables count as single
/// edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedLevenshtein;

impl FuzzyMatcher for NormalizedLevenshtein {
    fn distance(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 0.0;
        }
        1.0 - strsim::normalized_levenshtein(a, b)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_are_zero() {
        let m = NormalizedLevenshtein;
        assert_eq!(m.distance("etf", "etf"), 0.0);
        assert_eq!(m.distance("삼성전자", "삼성전자"), 0.0);
        assert_eq!(m.distance("", ""), 0.0);
    }

    #[test]
    fn test_disjoint_strings_are_one() {
        let m = NormalizedLevenshtein;
        assert!((m.distance("abc", "xyz") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_counts_hangul_chars_not_bytes() {
        let m = NormalizedLevenshtein;
        // One syllable dropped from a four-syllable word: 1 edit / 4 chars.
        let d = m.distance("가이드북", "가이드");
        assert!((d - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric_and_bounded() {
        let m = NormalizedLevenshtein;
        for (a, b) in [("주식", "증식"), ("dividend", "divident"), ("", "etf")] {
            let d = m.distance(a, b);
            assert!((0.0..=1.0).contains(&d));
            assert!((d - m.distance(b, a)).abs() < 1e-9);
        }
    }
}
