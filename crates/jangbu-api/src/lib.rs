//! # jangbu-api
//!
//! HTTP surface for the Jangbu blog backend.
//!
//! The router exposes the search core plus the post catalog the frontend
//! renders from:
//!
//! - `GET /api/search?q=...&limit=N` — ranked fuzzy search; an empty or
//!   missing query is a successful empty response, never an error
//! - `GET /api/posts` — post summaries, newest first
//! - `GET /api/posts/{slug}` — full post
//! - `GET /api/tags/{tag}` — summaries of posts carrying the tag
//! - `POST /api/reload` — reload the corpus from disk and swap the index
//! - `GET /healthz` — liveness and corpus size
//!
//! The search index lives behind an async `RwLock`; reload builds the
//! replacement catalog before taking the write lock, so queries always see
//! either the old or the new corpus in full.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use routes::router;
pub use server::serve;
pub use state::AppState;
