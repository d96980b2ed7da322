//! View models for the recipe page.
//!
//! The page script draws exactly what it receives here. Cards are built only
//! from the visible list, so nothing below re-applies a filter.

use serde::Serialize;

use crate::browser::BrowserState;
use crate::catalog::RecipeCatalog;
use crate::models::{Recipe, RecipeId};

pub const PAGE_TITLE: &str = "Interactive Recipe Book";
pub const FILTER_HEADING: &str = "Dietary Restrictions:";
pub const SEARCH_PLACEHOLDER: &str = "Search recipe";
pub const CLEAR_FILTERS_LABEL: &str = "Clear Filters";

/// Everything needed to draw the page for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    /// Number of actions applied before this view was built. Clients drop
    /// any view older than the last one drawn.
    pub version: u64,
    pub title: &'static str,
    pub filter_heading: &'static str,
    pub search_placeholder: &'static str,
    pub search: String,
    pub dietary_options: Vec<String>,
    pub selected_dietary: Vec<String>,
    pub favorites_only: bool,
    pub favorites_button_label: &'static str,
    pub clear_button_label: &'static str,
    pub cards: Vec<RecipeCardView>,
}

/// One recipe card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCardView {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub cooking_time: String,
    pub image_src: String,
    pub image_alt: String,
    pub ingredients: Vec<String>,
    pub dietary: Vec<String>,
    pub is_favorite: bool,
    pub favorite_button_label: &'static str,
}

impl PageView {
    pub fn build(catalog: &RecipeCatalog, state: &BrowserState, version: u64) -> Self {
        let cards = state
            .visible(catalog)
            .into_iter()
            .map(|recipe| RecipeCardView::new(recipe, state.is_favorite(recipe.id)))
            .collect();

        Self {
            version,
            title: PAGE_TITLE,
            filter_heading: FILTER_HEADING,
            search_placeholder: SEARCH_PLACEHOLDER,
            search: state.criteria.search.clone(),
            dietary_options: catalog.dietary_options().to_vec(),
            selected_dietary: state.criteria.dietary.iter().cloned().collect(),
            favorites_only: state.favorites_only,
            favorites_button_label: favorites_button_label(state.favorites_only),
            clear_button_label: CLEAR_FILTERS_LABEL,
            cards,
        }
    }
}

impl RecipeCardView {
    pub fn new(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            cooking_time: format!("Cooking Time: {}", recipe.time),
            image_src: recipe.image_name.clone(),
            image_alt: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            dietary: recipe.dietary.clone(),
            is_favorite,
            favorite_button_label: favorite_button_label(is_favorite),
        }
    }
}

fn favorites_button_label(favorites_only: bool) -> &'static str {
    if favorites_only {
        "Show All Recipes"
    } else {
        "Show Favorites Only"
    }
}

fn favorite_button_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Remove from Favorites"
    } else {
        "Favorite"
    }
}
