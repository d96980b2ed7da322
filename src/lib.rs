pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod routes;
pub mod state;
pub mod view;

pub use browser::{Action, BrowserState, FavoriteSet};
pub use catalog::{load_recipes, sample_recipes, RecipeCatalog};
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use filter::filter_recipes;
pub use models::{FilterCriteria, Recipe, RecipeId};
pub use routes::create_router;
pub use state::{AppState, Revision};
pub use view::{PageView, RecipeCardView};
