use std::collections::HashSet;

use crate::models::IngredientAvailability;

static KNOWN_INGREDIENTS: &[&str] = &[
    "eggs", "milk", "butter", "cheese", "cream", "yogurt", "parmesan", "mozzarella",
    "flour", "sugar", "salt", "pepper", "rice", "pasta", "spaghetti", "noodles", "oats",
    "olive oil", "oil", "vinegar", "honey", "baking powder", "baking soda", "vanilla",
    "cinnamon", "paprika", "cumin", "broth", "chicken", "chicken breast", "beef",
    "ground beef", "pork", "bacon", "sausage", "turkey", "salmon", "tuna", "shrimp", "tofu",
    "beans", "lentils", "garlic", "onion", "tomato", "tomatoes", "potato", "potatoes",
    "carrot", "celery", "lettuce", "spinach", "broccoli", "mushroom", "zucchini",
    "bell pepper", "cucumber", "avocado", "corn", "peas", "lemon", "lime", "apple",
    "banana", "basil", "parsley", "cilantro", "ginger", "bread", "tortillas", "buns",
    "ketchup", "mustard", "mayonnaise", "soy sauce", "hot sauce", "salsa",
];

/// Reference set of ingredients the service knows how to shop for
#[derive(Debug, Clone)]
pub struct KnownIngredients {
    names: HashSet<String>,
}

impl Default for KnownIngredients {
    fn default() -> Self {
        Self::new(KNOWN_INGREDIENTS.iter().copied())
    }
}

impl KnownIngredients {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.trim().to_lowercase())
    }

    /// Reports availability for each name, in input order
    pub fn check<S: AsRef<str>>(&self, names: &[S]) -> Vec<IngredientAvailability> {
        names
            .iter()
            .map(|name| IngredientAvailability {
                name: name.as_ref().to_string(),
                available: self.contains(name.as_ref()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_preserves_order_and_names() {
        let known = KnownIngredients::default();
        let result = known.check(&["Eggs", "unobtainium", "soy sauce"]);

        assert_eq!(
            result,
            vec![
                IngredientAvailability {
                    name: "Eggs".to_string(),
                    available: true
                },
                IngredientAvailability {
                    name: "unobtainium".to_string(),
                    available: false
                },
                IngredientAvailability {
                    name: "soy sauce".to_string(),
                    available: true
                },
            ]
        );
    }

    #[test]
    fn test_check_empty_input() {
        let known = KnownIngredients::default();
        assert!(known.check::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_custom_set_ignores_case_and_whitespace() {
        let known = KnownIngredients::new(["Saffron "]);
        assert!(known.contains("saffron"));
        assert!(known.contains("  SAFFRON"));
        assert!(!known.contains("eggs"));
    }
}
