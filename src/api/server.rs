//! API server lifecycle — bind, log, serve.
//!
//! Pattern: bind → build `api_router` → run axum until the process is
//! stopped. The service is loopback-bound by default (`HEALTHGUARD_ADDR`
//! widens it) and carries no shutdown channel; it lives as long as the
//! process does.

use std::net::SocketAddr;

use crate::api::router::api_router;
use crate::api::types::ApiContext;

/// Serve the API on `addr` until the process exits.
pub async fn serve(addr: SocketAddr, ctx: ApiContext) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "API server listening");

    axum::serve(listener, api_router(ctx)).await
}
