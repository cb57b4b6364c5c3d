//! Router assembly.

mod api;
mod common;
pub use api::api_routes;
pub use common::common_routes;

use crate::handlers::not_found;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: API routes, operational routes, JSON 404 fallback and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
