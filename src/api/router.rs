//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Routes are nested under `/api/`. There is no auth layer:
//! the service binds to loopback by default and holds no private data.
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with all endpoints under `/api/`.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/diseases", get(endpoints::diseases::list))
        .route("/cities", get(endpoints::cities::list))
        .route("/remedies/:disease", get(endpoints::remedies::lookup))
        .route("/facilities/:disease", get(endpoints::facilities::search))
        .route("/screenings/:disease", post(endpoints::screenings::create))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        // The companion form is served from a separate local origin.
        .layer(CorsLayer::permissive())
}
