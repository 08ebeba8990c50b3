//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use muebles_app::ports::FurnitureRepository;

use crate::state::AppState;

const NOT_FOUND_PAGE: &str =
    "<h1>Error 404</h1><h3>La URL indicada no existe en este servidor</h3>";

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api/v1`; anything else, including an unsupported
/// method on a known path, gets the HTML 404 page.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<FR>(state: AppState<FR>) -> Router
where
    FR: FurnitureRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
