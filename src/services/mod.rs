pub mod grocery;
pub mod known_ingredients;
pub mod providers;

pub use grocery::{GroceryAggregator, GroceryOptions};
pub use known_ingredients::KnownIngredients;
pub use providers::{CatalogRecipeLookup, HttpRecipeLookup, RecipeLookup};
