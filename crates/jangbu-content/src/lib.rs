//! Markdown post loading and content utilities for Jangbu.
//!
//! This crate turns a directory of markdown files into the blog's post
//! corpus. Each file carries YAML frontmatter with post metadata; the body
//! is the article content. Missing metadata degrades gracefully: the title
//! falls back to the first heading, the excerpt to the first paragraph,
//! and the slug to the normalized file stem.
//!
//! # Modules
//!
//! - [`markdown`]: frontmatter extraction and excerpt/plain-text helpers
//! - [`post`]: the `Post` record and its frontmatter metadata
//! - [`loader`]: recursive content-directory loader
//!
//! # Example
//!
//! ```rust,no_run
//! use jangbu_content::PostLoader;
//!
//! # async fn run() -> jangbu_core::Result<()> {
//! let loader = PostLoader::new("content/posts");
//! let posts = loader.load_all().await?;
//! for post in &posts {
//!     println!("{}: {}", post.slug, post.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod markdown;
pub mod post;

// Re-export commonly used types
pub use loader::PostLoader;
pub use markdown::{split_frontmatter, Frontmatter};
pub use post::{Post, PostMeta};
