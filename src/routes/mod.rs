pub mod actions;
pub mod api;

use axum::{
    response::{Html, IntoResponse},
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Index page
        .route("/", get(index))
        // Read endpoints
        .route("/api/view", get(api::get_view))
        .route("/api/recipes", get(api::get_visible_recipes))
        .route("/api/recipes/all", get(api::get_all_recipes))
        .route("/api/dietary-tags", get(api::get_dietary_tags))
        .route("/api/state", get(api::get_state))
        // State transitions
        .route("/api/favorites/{id}/toggle", post(actions::toggle_favorite))
        .route("/api/favorites-only/toggle", post(actions::toggle_favorites_only))
        .route("/api/filters/dietary", put(actions::set_dietary_filter))
        .route("/api/filters/search", put(actions::set_search_filter))
        .route("/api/filters/clear", post(actions::clear_filters))
        // Health check
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> impl IntoResponse {
    Html(include_str!("../../static/index.html"))
}

async fn health() -> &'static str {
    "OK"
}
