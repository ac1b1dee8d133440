//! Server bootstrap.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::routes::router;
use crate::state::AppState;
use crate::Result;

/// Bind `addr` and serve the API until the task is cancelled.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(jangbu_core::Error::from)?;

    log::info!("jangbu API listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(jangbu_core::Error::from)?;

    Ok(())
}
