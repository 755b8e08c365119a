use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use super::RecipeSummary;

/// Grocery store section an ingredient is shelved in
///
/// Declaration order is the categorizer's priority order and the order
/// buckets appear in a grocery list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Dairy,
    Protein,
    Pantry,
    Bread,
    Condiments,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Protein => "protein",
            Category::Pantry => "pantry",
            Category::Bread => "bread",
            Category::Condiments => "condiments",
            Category::Other => "other",
        }
    }

    /// Title-cased label used by checklists
    pub fn title(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Protein => "Protein",
            Category::Pantry => "Pantry",
            Category::Bread => "Bread",
            Category::Condiments => "Condiments",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recipe that asked for an ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributingRecipe {
    pub recipe_id: u32,
    pub recipe_name: String,
}

/// One line of the grocery list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntry {
    pub name: String,
    /// Always at least 1; fractional amounts are rounded up
    pub quantity: u32,
    pub unit: String,
    pub category: Category,
    pub notes: String,
    pub contributing_recipes: Vec<ContributingRecipe>,
}

impl IngredientEntry {
    /// Records `recipe` as a contributor unless it is already listed
    pub fn add_contributor(&mut self, recipe_id: u32, recipe_name: &str) {
        if self
            .contributing_recipes
            .iter()
            .any(|c| c.recipe_id == recipe_id)
        {
            return;
        }

        self.contributing_recipes.push(ContributingRecipe {
            recipe_id,
            recipe_name: recipe_name.to_string(),
        });
    }
}

/// Ingredient entries keyed by raw ingredient name, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct IngredientMap {
    entries: Vec<IngredientEntry>,
    index: HashMap<String, usize>,
}

impl IngredientMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&IngredientEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Returns the entry for `name`, inserting the one built by `make` if absent
    pub fn get_or_insert_with<F>(&mut self, name: &str, make: F) -> &mut IngredientEntry
    where
        F: FnOnce() -> IngredientEntry,
    {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.entries.push(make());
                let i = self.entries.len() - 1;
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.entries[i]
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn values(&self) -> std::slice::Iter<'_, IngredientEntry> {
        self.entries.iter()
    }
}

impl Serialize for IngredientMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, entry)?;
        }
        map.end()
    }
}

/// Ingredients grouped by store section, each bucket sorted by name
pub type CategorizedIngredients = BTreeMap<Category, Vec<IngredientEntry>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrocerySummary {
    pub total_recipes: usize,
    pub total_ingredients: usize,
    pub estimated_cost: f64,
    /// Sum of the recipes' cooking times in minutes
    pub estimated_time: u32,
}

/// Consolidated shopping list for one or more recipes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    pub recipes: Vec<RecipeSummary>,
    pub ingredients: IngredientMap,
    pub categorized_ingredients: CategorizedIngredients,
    pub summary: GrocerySummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientAvailability {
    pub name: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    pub name: String,
    pub checked: bool,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistSection {
    pub category: String,
    pub items: Vec<ChecklistItem>,
}
