use serde::{Deserialize, Serialize};

/// Recipe record as returned by the recipe lookup backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRef {
    pub id: u32,
    pub name: String,
    pub servings: u32,
    /// Minutes
    #[serde(default)]
    pub cooking_time: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Trimmed recipe listed at the top of a grocery list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u32,
    pub name: String,
    /// Servings the list was computed for (override or native)
    pub servings: u32,
    pub cooking_time: u32,
}

impl RecipeSummary {
    pub fn from_recipe(recipe: &RecipeRef, servings: u32) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            servings,
            cooking_time: recipe.cooking_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserialization_camel_case() {
        let json = r#"{
            "id": 1,
            "name": "Omelet",
            "servings": 2,
            "cookingTime": 10,
            "ingredients": ["eggs", "cheese", "butter"]
        }"#;

        let recipe: RecipeRef = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.cooking_time, 10);
        assert_eq!(recipe.ingredients, vec!["eggs", "cheese", "butter"]);
    }

    #[test]
    fn test_recipe_missing_optional_fields() {
        let json = r#"{"id": 3, "name": "Water", "servings": 1}"#;

        let recipe: RecipeRef = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.cooking_time, 0);
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_summary_uses_requested_servings() {
        let recipe = RecipeRef {
            id: 9,
            name: "Pancakes".to_string(),
            servings: 4,
            cooking_time: 20,
            ingredients: vec!["flour".to_string()],
        };

        let summary = RecipeSummary::from_recipe(&recipe, 8);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["servings"], 8);
        assert_eq!(json["cookingTime"], 20);
    }
}
