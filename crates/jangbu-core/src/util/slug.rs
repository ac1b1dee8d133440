//! Post slugs.
//!
//! A post is addressed by a stable slug, usually derived from its markdown
//! file name and also usable as a URL path segment. Frontmatter may
//! override the slug, so both paths and free-form titles go through the
//! same normalization.

use std::path::Path;

/// Normalize arbitrary text into a lowercase kebab-case slug.
///
/// Whitespace runs and underscores both become a single hyphen, so
/// `"samsung_q3  earnings"` and `"Samsung Q3 Earnings"` map to the same
/// slug. Korean titles pass through unchanged otherwise: Hangul has no
/// case and is valid in URL paths once percent-encoded.
///
/// # Examples
///
/// ```
/// use jangbu_core::util::slug::normalize_slug;
///
/// assert_eq!(normalize_slug("US ETF Guide"), "us-etf-guide");
/// assert_eq!(normalize_slug("samsung_q3_earnings"), "samsung-q3-earnings");
/// assert_eq!(normalize_slug("  삼성전자  3분기 "), "삼성전자-3분기");
/// ```
pub fn normalize_slug(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for word in raw.to_lowercase().split(|c: char| c.is_whitespace() || c == '_') {
        if word.is_empty() {
            continue;
        }
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }
    slug
}

/// Derive a post slug from a markdown file path.
///
/// The extension is dropped and the stem is run through
/// [`normalize_slug`]. `None` means the path cannot name a post: no stem,
/// a non-UTF-8 stem, or a stem that normalizes to nothing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jangbu_core::util::slug::slug_from_path;
///
/// assert_eq!(
///     slug_from_path(Path::new("/posts/US ETF Guide.md")),
///     Some("us-etf-guide".to_string())
/// );
/// assert_eq!(slug_from_path(Path::new("/")), None);
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(normalize_slug)
        .filter(|s| !s.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
