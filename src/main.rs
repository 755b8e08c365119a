use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cooking_api::{
    api::{create_router, AppState},
    cache::{create_redis_client, Cache, CacheWriterHandle},
    config::{Config, RecipeSource},
    services::{CatalogRecipeLookup, HttpRecipeLookup, RecipeLookup},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cooking_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let (recipes, cache_writer) = build_recipe_lookup(&config)?;

    tracing::info!(backend = recipes.name(), "Recipe lookup ready");

    let app = create_router(AppState::new(recipes));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(writer) = cache_writer {
        writer.shutdown().await;
    }

    tracing::info!("Server stopped");
    Ok(())
}

fn build_recipe_lookup(
    config: &Config,
) -> anyhow::Result<(Arc<dyn RecipeLookup>, Option<CacheWriterHandle>)> {
    match config.recipe_source {
        RecipeSource::Catalog => {
            let catalog = match &config.recipe_catalog_path {
                Some(path) => CatalogRecipeLookup::from_json_file(path)?,
                None => CatalogRecipeLookup::with_sample_recipes(),
            };
            tracing::info!(recipes = catalog.len(), "Using in-memory recipe catalog");
            let lookup: Arc<dyn RecipeLookup> = Arc::new(catalog);
            Ok((lookup, None))
        }
        RecipeSource::Http => {
            let api_url = config
                .recipe_api_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("RECIPE_API_URL is not set"))?;

            let (cache, writer) = match &config.redis_url {
                Some(url) => {
                    let (cache, writer) = Cache::new(create_redis_client(url)?);
                    (Some(cache), Some(writer))
                }
                None => (None, None),
            };

            tracing::info!(
                api_url = %api_url,
                cached = cache.is_some(),
                "Using remote recipe API"
            );

            let lookup: Arc<dyn RecipeLookup> = Arc::new(HttpRecipeLookup::new(
                api_url,
                config.recipe_api_key.clone(),
                Duration::from_secs(config.request_timeout_secs),
                cache,
            )?);
            Ok((lookup, writer))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
