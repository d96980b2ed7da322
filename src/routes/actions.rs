use axum::{
    extract::{Path, State},
    Json,
};

use crate::browser::Action;
use crate::error::ApiError;
use crate::models::{RecipeId, SetDietaryRequest, SetSearchRequest};
use crate::state::AppState;
use crate::view::PageView;

/// Applies `action` and renders the resulting page.
async fn apply(state: &AppState, action: Action) -> Json<PageView> {
    let next = state.dispatch(action).await;
    Json(PageView::build(&state.catalog, &next.state, next.version))
}

/// POST /api/favorites/{id}/toggle - Add or remove a favorite.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
) -> Result<Json<PageView>, ApiError> {
    if !state.catalog.contains(id) {
        tracing::warn!("Toggle for unknown recipe {}", id);
        return Err(ApiError::RecipeNotFound(id));
    }

    Ok(apply(&state, Action::ToggleFavorite { id }).await)
}

/// POST /api/favorites-only/toggle - Flip the favorites-only view.
pub async fn toggle_favorites_only(State(state): State<AppState>) -> Json<PageView> {
    apply(&state, Action::ToggleFavoritesOnly).await
}

/// PUT /api/filters/dietary - Replace the selected dietary tags.
pub async fn set_dietary_filter(
    State(state): State<AppState>,
    Json(req): Json<SetDietaryRequest>,
) -> Json<PageView> {
    apply(&state, Action::SetDietary { tags: req.tags }).await
}

/// PUT /api/filters/search - Replace the search text.
pub async fn set_search_filter(
    State(state): State<AppState>,
    Json(req): Json<SetSearchRequest>,
) -> Json<PageView> {
    apply(&state, Action::SetSearch { search: req.search }).await
}

/// POST /api/filters/clear - Clear the dietary tags. Search text is kept.
pub async fn clear_filters(State(state): State<AppState>) -> Json<PageView> {
    apply(&state, Action::ClearFilters).await
}
