//! Jangbu Core — shared errors and utilities.
//!
//! This crate provides the foundational types used across all Jangbu crates.
//! It has no internal Jangbu dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Slug and path utilities

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::slug::{normalize_slug, slug_from_path};
