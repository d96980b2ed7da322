//! Browser state and its transitions.
//!
//! [`BrowserState`] is an immutable snapshot. Each operation borrows the
//! current snapshot and returns the next one, so the holder can swap it in
//! wholesale and readers never observe a half-applied change.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::RecipeCatalog;
use crate::filter::filter_recipes;
use crate::models::{FilterCriteria, Recipe, RecipeId};

/// Recipe ids the user has marked as favorite.
pub type FavoriteSet = BTreeSet<RecipeId>;

/// Everything that decides which recipes are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserState {
    pub favorites: FavoriteSet,
    pub criteria: FilterCriteria,
    pub favorites_only: bool,
}

/// A user action against the browser state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ToggleFavorite { id: RecipeId },
    SetDietary { tags: Vec<String> },
    SetSearch { search: String },
    ToggleFavoritesOnly,
    /// Clears the dietary tags only. Search text and the favorites-only
    /// toggle are left as they are.
    ClearFilters,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the favorites, or removes it if already present.
    pub fn toggle_favorite(&self, id: RecipeId) -> Self {
        let mut favorites = self.favorites.clone();
        if !favorites.remove(&id) {
            favorites.insert(id);
        }
        Self {
            favorites,
            ..self.clone()
        }
    }

    /// Replaces the dietary filter.
    pub fn set_dietary_filter<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.criteria.dietary = tags.into_iter().map(Into::into).collect();
        next
    }

    /// Replaces the search text.
    pub fn set_search_filter(&self, search: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.criteria.search = search.into();
        next
    }

    pub fn toggle_favorites_only(&self) -> Self {
        Self {
            favorites_only: !self.favorites_only,
            ..self.clone()
        }
    }

    pub fn clear_filters(&self) -> Self {
        let mut next = self.clone();
        next.criteria.dietary.clear();
        next
    }

    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::ToggleFavorite { id } => self.toggle_favorite(id),
            Action::SetDietary { tags } => self.set_dietary_filter(tags),
            Action::SetSearch { search } => self.set_search_filter(search),
            Action::ToggleFavoritesOnly => self.toggle_favorites_only(),
            Action::ClearFilters => self.clear_filters(),
        }
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(&id)
    }

    /// The recipes to display for this snapshot.
    pub fn visible<'a>(&self, catalog: &'a RecipeCatalog) -> Vec<&'a Recipe> {
        filter_recipes(
            catalog.recipes(),
            &self.favorites,
            &self.criteria,
            self.favorites_only,
        )
    }
}
