use axum::{extract::State, Json};

use crate::browser::BrowserState;
use crate::models::{GetDietaryTagsResponse, GetRecipesResponse};
use crate::state::AppState;
use crate::view::PageView;

/// GET /api/view - Page view model for the current state.
pub async fn get_view(State(state): State<AppState>) -> Json<PageView> {
    Json(state.page().await)
}

/// GET /api/recipes - Recipes passing the current filters, in catalog order.
pub async fn get_visible_recipes(State(state): State<AppState>) -> Json<GetRecipesResponse> {
    let snapshot = state.snapshot().await;
    let recipes: Vec<_> = snapshot
        .visible(&state.catalog)
        .into_iter()
        .cloned()
        .collect();

    Json(GetRecipesResponse {
        total: state.catalog.len(),
        recipes,
    })
}

/// GET /api/recipes/all - The whole catalog, unfiltered.
pub async fn get_all_recipes(State(state): State<AppState>) -> Json<GetRecipesResponse> {
    Json(GetRecipesResponse {
        total: state.catalog.len(),
        recipes: state.catalog.recipes().to_vec(),
    })
}

/// GET /api/dietary-tags - Tags offered in the dietary filter.
pub async fn get_dietary_tags(State(state): State<AppState>) -> Json<GetDietaryTagsResponse> {
    Json(GetDietaryTagsResponse {
        tags: state.catalog.dietary_options().to_vec(),
    })
}

/// GET /api/state - Raw browser state snapshot.
pub async fn get_state(State(state): State<AppState>) -> Json<BrowserState> {
    Json(state.snapshot().await)
}
