use crate::models::{ChecklistItem, ChecklistSection, GroceryList};

/// One `"<quantity> <unit> <name>"` line per ingredient, in the order the
/// ingredients were first added
pub fn to_simple_list(list: &GroceryList) -> Vec<String> {
    list.ingredients
        .values()
        .map(|e| format!("{} {} {}", e.quantity, e.unit, e.name))
        .collect()
}

/// Unchecked checklist, one section per store category
pub fn to_checklist(list: &GroceryList) -> Vec<ChecklistSection> {
    list.categorized_ingredients
        .iter()
        .map(|(category, entries)| ChecklistSection {
            category: category.title().to_string(),
            items: entries
                .iter()
                .map(|e| ChecklistItem {
                    name: e.name.clone(),
                    checked: false,
                    notes: e.notes.clone(),
                })
                .collect(),
        })
        .collect()
}
