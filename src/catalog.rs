use std::path::Path;

use crate::models::{Recipe, RecipeId};

/// The fixed recipe list plus the dietary options derived from it.
///
/// Options are computed once at construction; the list never changes
/// afterwards so they never need recomputing.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    dietary_options: Vec<String>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let dietary_options = collect_dietary_options(&recipes);
        Self {
            recipes,
            dietary_options,
        }
    }

    /// Catalog holding the built-in sample recipes.
    pub fn sample() -> Self {
        Self::new(sample_recipes())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Union of all tags across the catalog, deduplicated, in first-seen order.
    pub fn dietary_options(&self) -> &[String] {
        &self.dietary_options
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn collect_dietary_options(recipes: &[Recipe]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for tag in recipes.iter().flat_map(|r| r.dietary.iter()) {
        if !options.contains(tag) {
            options.push(tag.clone());
        }
    }
    options
}

/// The three recipes the browser ships with.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            1,
            "Vegetarian Lasagna",
            "A delicious and healthy vegetarian lasagna.",
            "1 hour",
            "images/lasagna.png",
            &["Lasagna noodles", "Tomato sauce", "Spinach", "Ricotta cheese"],
            &["Vegetarian"],
        ),
        Recipe::new(
            2,
            "Grilled Chicken Salad",
            "A refreshing and protein-packed salad.",
            "30 minutes",
            "images/chicken.png",
            &[
                "Chicken breasts",
                "Lettuce",
                "Tomatoes",
                "Avocado",
                "Balsamic vinaigrette",
            ],
            &["Keto", "Gluten-free"],
        ),
        Recipe::new(
            3,
            "Chocolate Lava Cake",
            "A decadent and indulgent chocolate dessert.",
            "45 minutes",
            "images/cake.png",
            &["Chocolate", "Eggs", "Butter", "Flour"],
            &["Dessert"],
        ),
    ]
}

/// Load recipes from a JSON file, falling back to the sample set.
///
/// The file must hold a JSON array of recipes. Contents are trusted as-is.
pub fn load_recipes(path: Option<&Path>) -> Vec<Recipe> {
    let Some(path) = path else {
        return sample_recipes();
    };

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(recipes) => return recipes,
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", path.display(), e);
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
        }
    }

    tracing::warn!("Using built-in sample recipes");
    sample_recipes()
}
