//! Recursive content-directory loader.
//!
//! Walks a directory tree for `*.md` files and resolves each one into a
//! [`Post`]. Individual bad files degrade to warnings; only a missing
//! content directory aborts the load. The returned corpus order (date
//! descending, then slug) is the order the search index preserves for
//! tie-breaking, so it must stay deterministic.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_walkdir::WalkDir;
use chrono::NaiveDate;
use futures::StreamExt;
use jangbu_core::{slug_from_path, Error, Result};

use crate::markdown::{first_heading, first_paragraph, split_frontmatter};
use crate::post::{Post, PostMeta};

/// Default excerpt length when the frontmatter provides none.
const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Loads the post corpus from a directory of markdown files.
pub struct PostLoader {
    content_dir: PathBuf,
    excerpt_chars: usize,
}

impl PostLoader {
    /// Create a loader over the given content directory.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    /// Override the derived-excerpt length.
    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    /// The directory this loader reads from.
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Load every publishable post under the content directory.
    ///
    /// Drafts are skipped. Files that cannot be read or resolved are
    /// logged and skipped. Posts are returned newest-first (date
    /// descending, undated posts last), slug as tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the content directory itself does
    /// not exist.
    pub async fn load_all(&self) -> Result<Vec<Arc<Post>>> {
        if !self.content_dir.is_dir() {
            return Err(Error::not_found(
                self.content_dir.to_string_lossy(),
                "content directory",
            ));
        }

        let files = find_markdown_files(&self.content_dir).await;

        let mut posts = Vec::new();
        let mut skipped = 0usize;

        for path in files {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("failed to read {:?}: {e}", path);
                    skipped += 1;
                    continue;
                }
            };

            match self.resolve_post(&path, &content) {
                Some(post) => posts.push(Arc::new(post)),
                None => skipped += 1,
            }
        }

        // Newest first; undated posts sort after dated ones.
        posts.sort_by(|a, b| {
            let a_key = (Reverse(a.date.clone()), a.slug.clone());
            let b_key = (Reverse(b.date.clone()), b.slug.clone());
            a_key.cmp(&b_key)
        });

        log::info!(
            "loaded {} posts from {:?} ({skipped} skipped)",
            posts.len(),
            self.content_dir
        );

        Ok(posts)
    }

    /// Resolve one markdown file into a `Post`, or `None` if it should be
    /// skipped (draft, unresolvable slug, metadata of the wrong shape).
    fn resolve_post(&self, path: &Path, content: &str) -> Option<Post> {
        let doc = split_frontmatter(content);

        let meta: PostMeta = match doc.deserialize() {
            Ok(m) => m.unwrap_or_default(),
            Err(e) => {
                log::warn!("skipping {:?}: {e}", path);
                return None;
            }
        };

        if meta.draft {
            log::debug!("skipping draft {:?}", path);
            return None;
        }

        let slug = match meta.slug {
            Some(s) => jangbu_core::normalize_slug(&s),
            None => match slug_from_path(path) {
                Some(s) => s,
                None => {
                    log::warn!("skipping {:?}: cannot derive a slug", path);
                    return None;
                }
            },
        };

        let body = doc.body();

        let title = meta
            .title
            .or_else(|| first_heading(body))
            .unwrap_or_else(|| slug.clone());

        let excerpt = meta
            .excerpt
            .or_else(|| first_paragraph(body, self.excerpt_chars))
            .unwrap_or_default();

        let date = meta.date.and_then(|d| validate_date(path, &d));

        Some(Post {
            slug,
            title,
            excerpt,
            content: body.to_string(),
            tags: meta.tags,
            date,
            category: meta.category,
            series: meta.series,
        })
    }
}

/// Keep a date only if it is a real `YYYY-MM-DD` calendar date.
fn validate_date(path: &Path, date: &str) -> Option<String> {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(_) => Some(date.to_string()),
        Err(e) => {
            log::warn!("ignoring invalid date '{date}' in {:?}: {e}", path);
            None
        }
    }
}

/// Find all markdown files under `root`, sorted for determinism.
///
/// Walk errors on individual entries are logged and skipped.
async fn find_markdown_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut walker = WalkDir::new(root);

    while let Some(entry) = walker.next().await {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("walk error under {:?}: {e}", root);
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let is_markdown = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if is_markdown {
            files.push(path);
        }
    }

    files.sort();
    files
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_directory_errors() {
        let loader = PostLoader::new("/no/such/dir");
        assert!(loader.load_all().await.is_err());
    }

    #[tokio::test]
    async fn test_load_empty_directory() {
        let dir = TempDir::new().unwrap();
        let posts = PostLoader::new(dir.path()).load_all().await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_load_resolves_metadata() {
        let dir = TempDir::new().unwrap();
        write_post(
            dir.path(),
            "samsung-q3.md",
            "---\ntitle: 삼성전자 3분기 실적\ndate: 2025-10-31\ntags:\n  - 주식\n  - 삼성전자\n---\n\n실적 요약 문단.\n",
        );

        let posts = PostLoader::new(dir.path()).load_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.slug, "samsung-q3");
        assert_eq!(post.title, "삼성전자 3분기 실적");
        assert_eq!(post.excerpt, "실적 요약 문단.");
        assert_eq!(post.tags, vec!["주식", "삼성전자"]);
        assert_eq!(post.date.as_deref(), Some("2025-10-31"));
    }

    #[tokio::test]
    async fn test_load_fallbacks_without_frontmatter() {
        let dir = TempDir::new().unwrap();
        write_post(
            dir.path(),
            "Dividend_Basics.md",
            "# 배당 투자 기초\n\n배당주의 기본 개념을 정리한다.\n",
        );

        let posts = PostLoader::new(dir.path()).load_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "dividend-basics");
        assert_eq!(posts[0].title, "배당 투자 기초");
        assert_eq!(posts[0].excerpt, "배당주의 기본 개념을 정리한다.");
        assert!(posts[0].date.is_none());
    }

    #[tokio::test]
    async fn test_load_skips_drafts_and_non_markdown() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "draft.md", "---\ntitle: WIP\ndraft: true\n---\n\nbody");
        write_post(dir.path(), "notes.txt", "not a post");
        write_post(dir.path(), "live.md", "---\ntitle: Live\n---\n\nbody");

        let posts = PostLoader::new(dir.path()).load_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "live");
    }

    #[tokio::test]
    async fn test_load_orders_newest_first() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "old.md", "---\ntitle: Old\ndate: 2024-01-05\n---\n\nbody");
        write_post(dir.path(), "new.md", "---\ntitle: New\ndate: 2025-06-01\n---\n\nbody");
        write_post(dir.path(), "undated.md", "---\ntitle: Undated\n---\n\nbody");

        let posts = PostLoader::new(dir.path()).load_all().await.unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old", "undated"]);
    }

    #[tokio::test]
    async fn test_load_recurses_subdirectories() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "2025/06/etf-guide.md", "---\ntitle: ETF\n---\n\nbody");

        let posts = PostLoader::new(dir.path()).load_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "etf-guide");
    }

    #[tokio::test]
    async fn test_load_ignores_invalid_date() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "bad-date.md", "---\ntitle: T\ndate: 2025-13-99\n---\n\nbody");

        let posts = PostLoader::new(dir.path()).load_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].date.is_none());
    }
}
