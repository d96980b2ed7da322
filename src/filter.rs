use std::collections::BTreeSet;

use crate::models::{FilterCriteria, Recipe, RecipeId};

/// Returns the recipes that pass every active filter, in their original order.
///
/// A recipe is kept only if all of the following hold:
/// - `favorites_only` is off, or its id is in `favorites`
/// - it carries every tag in `criteria.dietary`
/// - its lower-cased name contains the lower-cased `criteria.search`
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    favorites: &BTreeSet<RecipeId>,
    criteria: &FilterCriteria,
    favorites_only: bool,
) -> Vec<&'a Recipe> {
    let needle = criteria.search.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            matches(recipe, favorites, &criteria.dietary, &needle, favorites_only)
        })
        .collect()
}

fn matches(
    recipe: &Recipe,
    favorites: &BTreeSet<RecipeId>,
    dietary: &BTreeSet<String>,
    needle: &str,
    favorites_only: bool,
) -> bool {
    if favorites_only && !favorites.contains(&recipe.id) {
        return false;
    }
    if !dietary.is_empty() && !recipe.has_all_tags(dietary) {
        return false;
    }
    if !needle.is_empty() && !recipe.name.to_lowercase().contains(needle) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_recipes;

    fn criteria(dietary: &[&str], search: &str) -> FilterCriteria {
        FilterCriteria {
            dietary: dietary.iter().map(|s| s.to_string()).collect(),
            search: search.to_string(),
        }
    }

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        let recipes = sample_recipes();
        let visible = filter_recipes(&recipes, &BTreeSet::new(), &FilterCriteria::default(), false);

        assert_eq!(
            names(&visible),
            vec!["Vegetarian Lasagna", "Grilled Chicken Salad", "Chocolate Lava Cake"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let recipes = sample_recipes();
        let favorites = BTreeSet::new();

        let visible = filter_recipes(&recipes, &favorites, &criteria(&[], "chicken"), false);
        assert_eq!(names(&visible), vec!["Grilled Chicken Salad"]);

        let visible = filter_recipes(&recipes, &favorites, &criteria(&[], "LAVA"), false);
        assert_eq!(names(&visible), vec!["Chocolate Lava Cake"]);
    }

    #[test]
    fn test_search_only_matches_name() {
        let recipes = sample_recipes();
        // "protein" appears only in the salad description
        let visible = filter_recipes(&recipes, &BTreeSet::new(), &criteria(&[], "protein"), false);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_single_dietary_tag() {
        let recipes = sample_recipes();
        let visible = filter_recipes(&recipes, &BTreeSet::new(), &criteria(&["Keto"], ""), false);
        assert_eq!(names(&visible), vec!["Grilled Chicken Salad"]);
    }

    #[test]
    fn test_dietary_tags_use_and_semantics() {
        let recipes = sample_recipes();
        let favorites = BTreeSet::new();

        let visible = filter_recipes(&recipes, &favorites, &criteria(&["Keto", "Dessert"], ""), false);
        assert!(visible.is_empty());

        let visible =
            filter_recipes(&recipes, &favorites, &criteria(&["Keto", "Gluten-free"], ""), false);
        assert_eq!(names(&visible), vec!["Grilled Chicken Salad"]);
    }

    #[test]
    fn test_unknown_dietary_tag_matches_nothing() {
        let recipes = sample_recipes();
        let visible = filter_recipes(&recipes, &BTreeSet::new(), &criteria(&["Paleo"], ""), false);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_favorites_only_with_no_favorites_is_empty() {
        let recipes = sample_recipes();
        let visible = filter_recipes(&recipes, &BTreeSet::new(), &FilterCriteria::default(), true);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_favorites_only_keeps_catalog_order() {
        let recipes = sample_recipes();
        let favorites: BTreeSet<RecipeId> = [3, 1].into();

        let visible = filter_recipes(&recipes, &favorites, &FilterCriteria::default(), true);
        assert_eq!(names(&visible), vec!["Vegetarian Lasagna", "Chocolate Lava Cake"]);

        // Favorites are ignored when the toggle is off
        let visible = filter_recipes(&recipes, &favorites, &FilterCriteria::default(), false);
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_all_conditions_combine() {
        let recipes = sample_recipes();
        let favorites: BTreeSet<RecipeId> = [1, 2].into();

        let visible = filter_recipes(&recipes, &favorites, &criteria(&["Keto"], "salad"), true);
        assert_eq!(names(&visible), vec!["Grilled Chicken Salad"]);

        let visible = filter_recipes(&recipes, &favorites, &criteria(&["Dessert"], "cake"), true);
        assert!(visible.is_empty());
    }
}
