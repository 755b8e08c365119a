//! Grocery list generation
//!
//! `aggregator` drives recipe lookups and merges ingredients; the other
//! modules are pure functions over static tables.

pub mod aggregator;
pub mod categorizer;
pub mod cost;
pub mod format;
pub mod quantity;

pub use aggregator::{GroceryAggregator, GroceryOptions};
pub use categorizer::categorize;
pub use cost::{estimate_cost, DEFAULT_PRICE};
pub use format::{to_checklist, to_simple_list};
pub use quantity::{estimate_quantity, QuantityEstimate};
