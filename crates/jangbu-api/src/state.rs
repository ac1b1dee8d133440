//! Shared router state.
//!
//! The catalog (post list + search index) is one value behind one lock so
//! a reload can never expose a corpus/index mix.

use std::sync::Arc;

use jangbu_content::{Post, PostLoader};
use jangbu_search::{SearchConfig, SearchIndex};
use tokio::sync::RwLock;

use crate::Result;

/// The loaded corpus and its search index, replaced wholesale on reload.
pub struct Catalog {
    /// Posts in corpus order (newest first).
    pub posts: Vec<Arc<Post>>,
    /// Search index built over exactly those posts.
    pub index: SearchIndex,
}

/// State shared by all request handlers.
pub struct AppState {
    catalog: RwLock<Catalog>,
    loader: PostLoader,
    search_config: SearchConfig,
}

impl AppState {
    /// Load the corpus through `loader` and build the initial index.
    pub async fn new(loader: PostLoader, search_config: SearchConfig) -> Result<Self> {
        let posts = loader.load_all().await?;
        let index = SearchIndex::build_with_config(&posts, search_config.clone());
        Ok(Self {
            catalog: RwLock::new(Catalog { posts, index }),
            loader,
            search_config,
        })
    }

    /// Read access to the current catalog.
    pub async fn catalog(&self) -> tokio::sync::RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    /// Reload the corpus from disk and publish a fresh catalog.
    ///
    /// The replacement is fully built before the write lock is taken, so
    /// concurrent searches observe either the old or the new corpus, never
    /// a partial mix. Returns the new post count.
    pub async fn reload(&self) -> Result<usize> {
        let posts = self.loader.load_all().await?;
        let index = SearchIndex::build_with_config(&posts, self.search_config.clone());
        let count = posts.len();

        let mut catalog = self.catalog.write().await;
        *catalog = Catalog { posts, index };

        log::info!("catalog reloaded: {count} posts");
        Ok(count)
    }
}

// ============================================================================
// Tests
// ============================================================================
