//! Remote recipe API backend
//!
//! Fetches `GET {api_url}/recipes/{id}`. The API may answer with a bare
//! recipe object or with the `{"success": true, "data": {...}}` envelope.
//! Successful lookups are cached for an hour when Redis is configured.

use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::{AppError, AppResult},
    models::RecipeRef,
    services::providers::RecipeLookup,
};

const RECIPE_CACHE_TTL: u64 = 3600; // 1 hour
const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipePayload {
    Wrapped { data: RecipeRef },
    Bare(RecipeRef),
}

impl From<RecipePayload> for RecipeRef {
    fn from(payload: RecipePayload) -> Self {
        match payload {
            RecipePayload::Wrapped { data } => data,
            RecipePayload::Bare(recipe) => recipe,
        }
    }
}

#[derive(Clone)]
pub struct HttpRecipeLookup {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
    cache: Option<Cache>,
}

impl HttpRecipeLookup {
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        timeout: Duration,
        cache: Option<Cache>,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            cache,
        })
    }

    fn recipe_url(&self, id: u32) -> String {
        format!("{}/recipes/{}", self.api_url, id)
    }

    async fn fetch(&self, id: u32) -> AppResult<RecipeRef> {
        let mut request = self.http_client.get(self.recipe_url(id));
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(id, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(id, status, &body));
        }

        let body = response.text().await.map_err(|e| transport_error(id, e))?;
        let recipe = parse_recipe(id, &body)?;

        tracing::debug!(
            recipe_id = id,
            ingredients = recipe.ingredients.len(),
            "Recipe fetched from API"
        );

        Ok(recipe)
    }
}

/// Connection-level failures mean the recipe service is down, not that the
/// recipe is missing
fn transport_error(recipe_id: u32, err: reqwest::Error) -> AppError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        AppError::UpstreamUnavailable {
            recipe_id,
            reason: err.to_string(),
        }
    } else {
        AppError::HttpClient(err)
    }
}

fn status_error(recipe_id: u32, status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::RecipeNotFound(recipe_id),
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT | StatusCode::BAD_GATEWAY => {
            AppError::UpstreamUnavailable {
                recipe_id,
                reason: format!("recipe API returned status {}", status),
            }
        }
        _ => {
            tracing::error!(
                recipe_id,
                status = %status,
                body = %body,
                "Recipe API request failed"
            );
            AppError::ExternalApi(format!(
                "Recipe API returned status {} for recipe {}: {}",
                status, recipe_id, body
            ))
        }
    }
}

fn parse_recipe(recipe_id: u32, body: &str) -> AppResult<RecipeRef> {
    let recipe: RecipeRef = serde_json::from_str::<RecipePayload>(body)
        .map_err(|e| {
            tracing::error!(recipe_id, error = %e, "Failed to deserialize recipe response");
            AppError::ExternalApi(format!(
                "Failed to parse recipe {} from recipe API: {}",
                recipe_id, e
            ))
        })?
        .into();

    if recipe.id != recipe_id {
        return Err(AppError::ExternalApi(format!(
            "Recipe API answered request for recipe {} with recipe {}",
            recipe_id, recipe.id
        )));
    }
    if recipe.servings == 0 {
        return Err(AppError::ExternalApi(format!(
            "Recipe {} has zero servings",
            recipe_id
        )));
    }

    Ok(recipe)
}

#[async_trait::async_trait]
impl RecipeLookup for HttpRecipeLookup {
    async fn get_recipe_by_id(&self, id: u32) -> AppResult<RecipeRef> {
        cached!(
            self.cache.as_ref(),
            CacheKey::Recipe(id),
            RECIPE_CACHE_TTL,
            self.fetch(id)
        )
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_lookup(api_url: &str) -> HttpRecipeLookup {
        HttpRecipeLookup::new(
            api_url.to_string(),
            Some("test_key".to_string()),
            Duration::from_secs(2),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_recipe_url_strips_trailing_slash() {
        let lookup = create_test_lookup("http://recipes.local/");
        assert_eq!(lookup.recipe_url(7), "http://recipes.local/recipes/7");
    }

    #[test]
    fn test_not_found_status() {
        let err = status_error(3, StatusCode::NOT_FOUND, "");
        assert!(matches!(err, AppError::RecipeNotFound(3)));
    }

    #[test]
    fn test_unavailable_status() {
        let err = status_error(3, StatusCode::SERVICE_UNAVAILABLE, "maintenance");
        assert!(matches!(
            err,
            AppError::UpstreamUnavailable { recipe_id: 3, .. }
        ));
    }

    #[test]
    fn test_other_status_is_external_api_error() {
        let err = status_error(3, StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(err, AppError::ExternalApi(msg) if msg.contains("boom")));
    }

    #[test]
    fn test_parse_bare_recipe() {
        let body = r#"{"id": 1, "name": "Omelet", "servings": 2, "cookingTime": 10, "ingredients": ["eggs"]}"#;
        let recipe = parse_recipe(1, body).unwrap();
        assert_eq!(recipe.name, "Omelet");
        assert_eq!(recipe.cooking_time, 10);
    }

    #[test]
    fn test_parse_enveloped_recipe() {
        let body = r#"{"success": true, "data": {"id": 2, "name": "Toast", "servings": 1, "cookingTime": 5, "ingredients": ["bread", "butter"]}}"#;
        let recipe = parse_recipe(2, body).unwrap();
        assert_eq!(recipe.name, "Toast");
        assert_eq!(recipe.ingredients, vec!["bread", "butter"]);
    }

    #[test]
    fn test_parse_rejects_mismatched_id() {
        let body = r#"{"id": 9, "name": "Other", "servings": 1}"#;
        assert!(matches!(parse_recipe(1, body), Err(AppError::ExternalApi(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_recipe(1, "<html>oops</html>"),
            Err(AppError::ExternalApi(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_upstream_unavailable() {
        // nothing listens on port 1
        let lookup = create_test_lookup("http://127.0.0.1:1");
        let err = lookup.get_recipe_by_id(5).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::UpstreamUnavailable { recipe_id: 5, .. }
        ));
    }

    #[tokio::test]
    async fn test_unreachable_cache_falls_through_to_api() {
        let client = crate::cache::create_redis_client("redis://127.0.0.1:1").unwrap();
        let (cache, _writer) = Cache::new(client);
        let lookup = HttpRecipeLookup::new(
            "http://127.0.0.1:1".to_string(),
            None,
            Duration::from_secs(2),
            Some(cache),
        )
        .unwrap();

        let err = lookup.get_recipe_by_id(5).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::UpstreamUnavailable { recipe_id: 5, .. }
        ));
    }
}
