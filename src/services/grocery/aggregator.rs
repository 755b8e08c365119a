use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        CategorizedIngredients, GroceryList, GrocerySummary, IngredientAvailability,
        IngredientEntry, IngredientMap, RecipeRef, RecipeSummary,
    },
    services::{known_ingredients::KnownIngredients, providers::RecipeLookup},
};

use super::{categorize, estimate_cost, estimate_quantity};

/// Caller options for a grocery list
#[derive(Debug, Clone, Default)]
pub struct GroceryOptions {
    /// Servings to shop for, applied to every recipe
    pub servings: Option<u32>,
    /// Ingredient names to leave off the list, matched case-insensitively
    /// after trimming, so `" butter"` also excludes `butter`
    pub exclude_ingredients: Vec<String>,
}

/// Builds grocery lists from recipe identifiers
///
/// Recipes are fetched one at a time in the order given. When several
/// recipes share an ingredient, the first recipe to introduce it decides the
/// quantity; later recipes are only recorded as contributors. Any lookup
/// failure aborts the whole list.
#[derive(Clone)]
pub struct GroceryAggregator {
    recipes: Arc<dyn RecipeLookup>,
    known_ingredients: Arc<KnownIngredients>,
}

impl GroceryAggregator {
    pub fn new(recipes: Arc<dyn RecipeLookup>) -> Self {
        Self {
            recipes,
            known_ingredients: Arc::new(KnownIngredients::default()),
        }
    }

    pub fn with_known_ingredients(mut self, known_ingredients: KnownIngredients) -> Self {
        self.known_ingredients = Arc::new(known_ingredients);
        self
    }

    /// Grocery list for `recipe_ids`, optionally rescaled to `options.servings`
    pub async fn generate_grocery_list(
        &self,
        recipe_ids: &[u32],
        options: &GroceryOptions,
    ) -> AppResult<GroceryList> {
        if options.servings == Some(0) {
            return Err(AppError::InvalidInput(
                "servings must be greater than 0".to_string(),
            ));
        }

        let exclude: HashSet<String> = options
            .exclude_ingredients
            .iter()
            .map(|name| name.trim().to_lowercase())
            .collect();

        self.aggregate(recipe_ids, |_| options.servings, &exclude)
            .await
    }

    /// Grocery list where each recipe may be rescaled to its own serving count
    ///
    /// Recipes missing from `servings_by_recipe_id` keep their native servings.
    pub async fn generate_multiple_grocery_list(
        &self,
        recipe_ids: &[u32],
        servings_by_recipe_id: &HashMap<u32, u32>,
    ) -> AppResult<GroceryList> {
        if let Some((id, _)) = servings_by_recipe_id.iter().find(|(_, s)| **s == 0) {
            return Err(AppError::InvalidInput(format!(
                "servings for recipe {} must be greater than 0",
                id
            )));
        }

        self.aggregate(
            recipe_ids,
            |recipe| servings_by_recipe_id.get(&recipe.id).copied(),
            &HashSet::new(),
        )
        .await
    }

    /// Categorized ingredients of a single recipe
    pub async fn generate_grocery_list_by_category(
        &self,
        recipe_id: u32,
        servings: Option<u32>,
    ) -> AppResult<CategorizedIngredients> {
        let options = GroceryOptions {
            servings,
            ..Default::default()
        };
        let list = self.generate_grocery_list(&[recipe_id], &options).await?;
        Ok(list.categorized_ingredients)
    }

    pub fn check_ingredient_availability<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Vec<IngredientAvailability> {
        self.known_ingredients.check(names)
    }

    async fn aggregate<F>(
        &self,
        recipe_ids: &[u32],
        servings_for: F,
        exclude: &HashSet<String>,
    ) -> AppResult<GroceryList>
    where
        F: Fn(&RecipeRef) -> Option<u32>,
    {
        if recipe_ids.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one recipe id is required".to_string(),
            ));
        }
        if recipe_ids.contains(&0) {
            return Err(AppError::InvalidInput(
                "recipe ids must be positive integers".to_string(),
            ));
        }

        tracing::info!(
            recipes = recipe_ids.len(),
            excluded = exclude.len(),
            backend = self.recipes.name(),
            "Generating grocery list"
        );

        let mut recipes = Vec::with_capacity(recipe_ids.len());
        let mut ingredients = IngredientMap::new();

        for &id in recipe_ids {
            let recipe = self.recipes.get_recipe_by_id(id).await.map_err(|e| {
                tracing::warn!(recipe_id = id, error = %e, "Recipe lookup failed, aborting grocery list");
                e
            })?;

            if recipe.servings == 0 {
                return Err(AppError::ExternalApi(format!(
                    "Recipe {} has zero servings",
                    recipe.id
                )));
            }

            let requested = servings_for(&recipe);
            let multiplier = requested
                .map(|servings| servings as f64 / recipe.servings as f64)
                .unwrap_or(1.0);

            recipes.push(RecipeSummary::from_recipe(
                &recipe,
                requested.unwrap_or(recipe.servings),
            ));

            for name in &recipe.ingredients {
                if exclude.contains(&name.trim().to_lowercase()) {
                    continue;
                }

                let entry = ingredients.get_or_insert_with(name, || {
                    let estimate = estimate_quantity(name, multiplier);
                    IngredientEntry {
                        name: name.clone(),
                        quantity: estimate.amount,
                        unit: estimate.unit.to_string(),
                        category: categorize(name),
                        notes: estimate.notes.to_string(),
                        contributing_recipes: Vec::new(),
                    }
                });
                entry.add_contributor(recipe.id, &recipe.name);
            }
        }

        let categorized_ingredients = categorize_entries(&ingredients);
        let summary = GrocerySummary {
            total_recipes: recipes.len(),
            total_ingredients: ingredients.len(),
            estimated_cost: estimate_cost(ingredients.keys()),
            estimated_time: recipes.iter().map(|r| r.cooking_time).sum(),
        };

        tracing::info!(
            recipes = summary.total_recipes,
            ingredients = summary.total_ingredients,
            estimated_cost = summary.estimated_cost,
            "Grocery list generated"
        );

        Ok(GroceryList {
            recipes,
            ingredients,
            categorized_ingredients,
            summary,
        })
    }
}

/// Groups entries by category, each group sorted by name ignoring case
fn categorize_entries(ingredients: &IngredientMap) -> CategorizedIngredients {
    let mut grouped = CategorizedIngredients::new();
    for entry in ingredients.values() {
        grouped
            .entry(entry.category)
            .or_default()
            .push(entry.clone());
    }

    for entries in grouped.values_mut() {
        entries.sort_by_cached_key(|e| e.name.to_lowercase());
    }

    grouped
}
