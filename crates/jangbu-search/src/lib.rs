//! Full-text fuzzy search over the Jangbu post corpus.
//!
//! The index owns a weighted, fuzzy-matchable representation of the posts:
//! each post's title, excerpt, body text, and tags are pre-tokenized at
//! build time, and queries run approximate (edit-distance based) matching
//! against those tokens. Results come back ranked, lower score = better,
//! with `0.0` meaning an exact match.
//!
//! The index is process-local and rebuilt wholesale whenever the corpus
//! changes; there is no incremental update and nothing is persisted.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use jangbu_content::Post;
//! use jangbu_search::SearchIndex;
//!
//! let posts = vec![Arc::new(Post {
//!     slug: "samsung-q3".into(),
//!     title: "삼성전자 3분기 실적".into(),
//!     tags: vec!["주식".into(), "삼성전자".into()],
//!     ..Default::default()
//! })];
//!
//! let index = SearchIndex::build(&posts);
//! let hits = index.search("삼성전자");
//! assert_eq!(hits[0].post.slug, "samsung-q3");
//! assert_eq!(hits[0].score, 0.0);
//! ```

pub mod config;
pub mod fuzzy;
pub mod index;

// Re-exports
pub use config::SearchConfig;
pub use fuzzy::{FuzzyMatcher, NormalizedLevenshtein};
pub use index::{SearchHit, SearchIndex};
