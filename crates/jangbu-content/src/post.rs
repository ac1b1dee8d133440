//! The `Post` record and its frontmatter metadata.

use serde::{Deserialize, Serialize};

/// Frontmatter metadata as authored in a markdown file.
///
/// Every field is optional so that partially-authored posts still load;
/// the loader fills gaps from the document body and file name. Unknown
/// keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMeta {
    /// Post title. Falls back to the first heading, then the slug.
    pub title: Option<String>,

    /// Explicit slug override. Falls back to the normalized file stem.
    pub slug: Option<String>,

    /// Short summary. Falls back to the first paragraph of the body.
    pub excerpt: Option<String>,

    /// Publication date, `YYYY-MM-DD`.
    pub date: Option<String>,

    /// Single category (e.g. "주식", "ETF", "부동산").
    pub category: Option<String>,

    /// Series this post belongs to, if any.
    pub series: Option<String>,

    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Draft posts are excluded from the corpus.
    #[serde(default)]
    pub draft: bool,
}

/// A fully resolved blog post.
///
/// This is the corpus unit consumed by the search index and served by the
/// API. `title`, `excerpt`, `content`, and `tags` participate in matching;
/// the remaining fields exist for listing and filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, used to correlate search hits back to posts.
    pub slug: String,

    /// Post title.
    pub title: String,

    /// Short summary shown in listings.
    pub excerpt: String,

    /// Markdown body with frontmatter stripped.
    pub content: String,

    /// Free-form tags.
    pub tags: Vec<String>,

    /// Publication date, `YYYY-MM-DD`, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Category, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Series membership, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

impl Post {
    /// Case-insensitive tag membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

// ============================================================================
// Tests
// ============================================================================
