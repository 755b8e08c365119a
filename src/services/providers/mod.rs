//! Recipe lookup backends
//!
//! The grocery aggregator never talks to a recipe source directly; it asks a
//! `RecipeLookup` for one recipe at a time. Backends decide how recipes are
//! stored, fetched and cached.

use crate::{error::AppResult, models::RecipeRef};

pub mod catalog;
pub mod http;

pub use catalog::CatalogRecipeLookup;
pub use http::HttpRecipeLookup;

/// Resolves recipe identifiers to recipe records
#[async_trait::async_trait]
pub trait RecipeLookup: Send + Sync {
    /// Fetches a single recipe
    ///
    /// Fails with `AppError::RecipeNotFound` when the backend has no recipe
    /// with this id, and `AppError::UpstreamUnavailable` when the backend
    /// itself cannot be reached.
    async fn get_recipe_by_id(&self, id: u32) -> AppResult<RecipeRef>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
