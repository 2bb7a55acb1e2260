use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::health::health;
use super::state::AppState;
use crate::modules::{attribute, category_attribute};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(attribute::api::routes())
        .merge(category_attribute::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
