//! Search configuration.
//!
//! Field weights, the acceptance threshold, and the match-length floor are
//! configuration constants, never derived at runtime. The defaults are the
//! tuned values the blog ships with; a config file may override them.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the search index.
///
/// Weights express how strongly a match in a field counts toward ranking
/// (they sum to 1.0 by default). The threshold is the maximum normalized
/// edit distance a field match may have before it is discarded; `0.0`
/// demands near-exact matching and `1.0` accepts almost anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weight of title matches.
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,

    /// Weight of excerpt matches.
    #[serde(default = "default_excerpt_weight")]
    pub excerpt_weight: f64,

    /// Weight of body-text matches.
    #[serde(default = "default_content_weight")]
    pub content_weight: f64,

    /// Weight of tag matches.
    #[serde(default = "default_tag_weight")]
    pub tag_weight: f64,

    /// Maximum accepted normalized distance, in `[0, 1]`.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Query terms shorter than this many characters are never matched,
    /// which keeps single-character coincidences out of the results.
    #[serde(default = "default_min_term_chars")]
    pub min_term_chars: usize,
}

fn default_title_weight() -> f64 {
    0.4
}

fn default_excerpt_weight() -> f64 {
    0.3
}

fn default_content_weight() -> f64 {
    0.2
}

fn default_tag_weight() -> f64 {
    0.1
}

fn default_threshold() -> f64 {
    0.4
}

fn default_min_term_chars() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            title_weight: default_title_weight(),
            excerpt_weight: default_excerpt_weight(),
            content_weight: default_content_weight(),
            tag_weight: default_tag_weight(),
            threshold: default_threshold(),
            min_term_chars: default_min_term_chars(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
