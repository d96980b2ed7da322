use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier of a recipe. Unique within a catalog.
pub type RecipeId = u32;

/// A single dish. Defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    /// Free-form duration label, e.g. "45 minutes".
    pub time: String,
    /// Asset path, resolved by the static file service.
    pub image_name: String,
    pub ingredients: Vec<String>,
    pub dietary: Vec<String>,
}

impl Recipe {
    pub fn new(
        id: RecipeId,
        name: impl Into<String>,
        description: impl Into<String>,
        time: impl Into<String>,
        image_name: impl Into<String>,
        ingredients: &[&str],
        dietary: &[&str],
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            time: time.into(),
            image_name: image_name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            dietary: dietary.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True if every tag in `tags` is carried by this recipe.
    pub fn has_all_tags<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> bool {
        tags.into_iter().all(|tag| self.dietary.contains(tag))
    }
}

/// Active dietary and search filters.
///
/// `dietary` uses AND semantics: a recipe must carry every listed tag.
/// `search` is a case-insensitive substring match against the recipe name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub dietary: BTreeSet<String>,
    #[serde(default)]
    pub search: String,
}

/// Body for PUT /api/filters/dietary.
#[derive(Debug, Deserialize)]
pub struct SetDietaryRequest {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body for PUT /api/filters/search.
#[derive(Debug, Deserialize)]
pub struct SetSearchRequest {
    #[serde(default)]
    pub search: String,
}

/// Response for the recipe listing endpoints.
#[derive(Debug, Serialize)]
pub struct GetRecipesResponse {
    pub total: usize,
    pub recipes: Vec<Recipe>,
}

/// Response for the dietary tag endpoint.
#[derive(Debug, Serialize)]
pub struct GetDietaryTagsResponse {
    pub tags: Vec<String>,
}
