use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipe_book::{create_router, load_recipes, AppState, Config, RecipeCatalog};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: LISTEN_ADDR (default: 0.0.0.0:3000)");
            eprintln!("Optional: RECIPES_PATH (default: built-in recipes)");
            eprintln!("Optional: STATIC_DIR (default: static)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting recipe book");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Static directory: {}", config.static_dir.display());

    // Load recipes
    let catalog = RecipeCatalog::new(load_recipes(config.recipes_path.as_deref()));
    tracing::info!(
        "Loaded {} recipes with {} dietary tags",
        catalog.len(),
        catalog.dietary_options().len()
    );

    if catalog.is_empty() {
        tracing::warn!("Recipe list is empty; the page will show no cards");
    }

    let state = AppState::new(catalog);

    // Build router; unmatched paths (app.js, images/...) come from the static dir
    let app = create_router(state).fallback_service(ServeDir::new(&config.static_dir));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
