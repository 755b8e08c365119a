use std::sync::Arc;

use crate::services::{GroceryAggregator, RecipeLookup};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub grocery: GroceryAggregator,
}

impl AppState {
    pub fn new(recipes: Arc<dyn RecipeLookup>) -> Self {
        Self {
            grocery: GroceryAggregator::new(recipes),
        }
    }
}
