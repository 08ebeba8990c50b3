//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod furniture;

use axum::Router;
use axum::routing::get;

use muebles_app::ports::FurnitureRepository;

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<FR>() -> Router<AppState<FR>>
where
    FR: FurnitureRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/muebles",
            get(furniture::list::<FR>).post(furniture::create::<FR>),
        )
        .route(
            "/muebles/{codigo}",
            get(furniture::get::<FR>)
                .put(furniture::update::<FR>)
                .delete(furniture::delete::<FR>),
        )
}
