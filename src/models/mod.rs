pub mod grocery;
pub mod recipe;

pub use grocery::{
    CategorizedIngredients, Category, ChecklistItem, ChecklistSection, ContributingRecipe,
    GroceryList, GrocerySummary, IngredientAvailability, IngredientEntry, IngredientMap,
};
pub use recipe::{RecipeRef, RecipeSummary};
