use std::collections::HashMap;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::RecipeRef,
    services::providers::RecipeLookup,
};

/// In-memory recipe catalog
///
/// Seeded either from the built-in sample recipes or from a JSON file
/// holding an array of recipes.
#[derive(Debug, Clone, Default)]
pub struct CatalogRecipeLookup {
    recipes: HashMap<u32, RecipeRef>,
}

impl CatalogRecipeLookup {
    /// Builds a catalog; later recipes replace earlier ones with the same id
    pub fn new(recipes: impl IntoIterator<Item = RecipeRef>) -> Self {
        Self {
            recipes: recipes.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// Loads a catalog from a JSON array of recipes
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read recipe catalog {}: {}", path.display(), e))?;
        let recipes: Vec<RecipeRef> = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Invalid recipe catalog {}: {}", path.display(), e))?;

        if let Some(bad) = recipes.iter().find(|r| r.id == 0 || r.servings == 0) {
            anyhow::bail!(
                "Recipe catalog {} has recipe {:?} with zero id or servings",
                path.display(),
                bad.name
            );
        }

        tracing::info!(
            path = %path.display(),
            recipes = recipes.len(),
            "Loaded recipe catalog"
        );

        Ok(Self::new(recipes))
    }

    /// Catalog with a handful of everyday recipes
    pub fn with_sample_recipes() -> Self {
        Self::new(sample_recipes())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait::async_trait]
impl RecipeLookup for CatalogRecipeLookup {
    async fn get_recipe_by_id(&self, id: u32) -> AppResult<RecipeRef> {
        self.recipes
            .get(&id)
            .cloned()
            .ok_or(AppError::RecipeNotFound(id))
    }

    fn name(&self) -> &'static str {
        "catalog"
    }
}

fn recipe(id: u32, name: &str, servings: u32, cooking_time: u32, ingredients: &[&str]) -> RecipeRef {
    RecipeRef {
        id,
        name: name.to_string(),
        servings,
        cooking_time,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
    }
}

fn sample_recipes() -> Vec<RecipeRef> {
    vec![
        recipe(1, "Omelet", 2, 10, &["eggs", "cheese", "butter"]),
        recipe(2, "Toast", 1, 5, &["bread", "butter"]),
        recipe(
            3,
            "Spaghetti Bolognese",
            4,
            45,
            &["spaghetti", "ground beef", "onion", "garlic", "tomatoes", "olive oil", "basil"],
        ),
        recipe(
            4,
            "Chicken Caesar Salad",
            2,
            20,
            &["chicken breast", "lettuce", "parmesan", "bread", "mayonnaise", "lemon"],
        ),
        recipe(
            5,
            "Pancakes",
            4,
            25,
            &["flour", "milk", "eggs", "sugar", "baking powder", "butter", "salt"],
        ),
        recipe(
            6,
            "Chicken Fried Rice",
            3,
            30,
            &["rice", "chicken", "eggs", "carrot", "peas", "soy sauce", "oil", "garlic"],
        ),
    ]
}
