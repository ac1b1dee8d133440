//! Route handlers and router assembly.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use jangbu_content::Post;

use crate::error::Result;
use crate::state::AppState;

/// Query parameters for `/api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Free-text query. Absent or blank means "no search", not an error.
    pub q: Option<String>,
    /// Optional cap on the number of results.
    pub limit: Option<usize>,
}

/// One search result as serialized to the client:
/// `{ "item": <post>, "score": <f64> }`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponseItem {
    /// The matched post.
    pub item: Post,
    /// Relevance score, lower = better, 0.0 = exact.
    pub score: f64,
}

/// Post summary for listing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    /// Post slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Short summary.
    pub excerpt: String,
    /// Tags.
    pub tags: Vec<String>,
    /// Publication date, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Category, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Series membership, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            tags: post.tags.clone(),
            date: post.date.clone(),
            category: post.category.clone(),
            series: post.series.clone(),
        }
    }
}

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/search", get(search))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{slug}", get(get_post))
        .route("/api/tags/{tag}", get(posts_by_tag))
        .route("/api/reload", post(reload))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// `GET /api/search` — ranked fuzzy search.
///
/// Contract with the frontend: an empty or missing `q` yields `200 []`,
/// never an error.
async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<SearchResponseItem>> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Json(Vec::new());
    }

    let catalog = state.catalog().await;
    let mut hits = catalog.index.search(&query);
    if let Some(limit) = params.limit {
        hits.truncate(limit);
    }

    log::debug!("search q={query:?} -> {} hits", hits.len());

    Json(
        hits.into_iter()
            .map(|hit| SearchResponseItem {
                item: (*hit.post).clone(),
                score: hit.score,
            })
            .collect(),
    )
}

/// `GET /api/posts` — summaries in corpus order.
async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<PostSummary>> {
    let catalog = state.catalog().await;
    Json(catalog.posts.iter().map(|p| PostSummary::from(p.as_ref())).collect())
}

/// `GET /api/posts/{slug}` — full post.
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Post>> {
    let catalog = state.catalog().await;
    let post = catalog
        .posts
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| jangbu_core::Error::not_found(&slug, "post"))?;
    Ok(Json((**post).clone()))
}

/// `GET /api/tags/{tag}` — posts carrying the tag.
async fn posts_by_tag(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
) -> Json<Vec<PostSummary>> {
    let catalog = state.catalog().await;
    Json(
        catalog
            .posts
            .iter()
            .filter(|p| p.has_tag(&tag))
            .map(|p| PostSummary::from(p.as_ref()))
            .collect(),
    )
}

/// `POST /api/reload` — reload the corpus and swap the index.
async fn reload(State(state): State<Arc<AppState>>) -> Result<Json<serde_json::Value>> {
    let count = state.reload().await?;
    Ok(Json(serde_json::json!({ "posts": count })))
}

/// `GET /healthz` — liveness probe.
async fn healthz(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let catalog = state.catalog().await;
    Json(serde_json::json!({ "status": "ok", "posts": catalog.posts.len() }))
}
