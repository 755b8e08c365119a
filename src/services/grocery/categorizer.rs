use crate::models::Category;

/// Store sections and their keywords, evaluated in this order; the first
/// section with a matching keyword wins.
static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Produce,
        &[
            "tomato", "onion", "garlic", "lettuce", "carrot", "celery", "bell pepper",
            "cucumber", "spinach", "broccoli", "potato", "mushroom", "zucchini", "avocado",
            "eggplant", "cabbage", "kale", "corn", "peas", "green beans", "lemon", "lime",
            "apple", "banana", "orange", "berries", "strawberry", "blueberry", "basil",
            "parsley", "cilantro", "ginger", "herbs",
        ],
    ),
    (
        Category::Dairy,
        &[
            "milk", "cheese", "butter", "cream", "yogurt", "parmesan", "mozzarella",
        ],
    ),
    (
        Category::Protein,
        &[
            "chicken", "beef", "pork", "bacon", "sausage", "turkey", "fish", "salmon", "tuna",
            "shrimp", "egg", "tofu", "beans", "lentils", "ham",
        ],
    ),
    (
        Category::Pantry,
        &[
            "flour", "sugar", "salt", "rice", "pasta", "spaghetti", "noodles", "oil",
            "vinegar", "spices", "baking powder", "baking soda", "oats", "broth", "stock",
            "honey", "cumin", "paprika", "cinnamon", "vanilla",
        ],
    ),
    (
        Category::Bread,
        &[
            "bread", "tortilla", "bun", "bagel", "roll", "pita", "croissant", "baguette",
        ],
    ),
    (
        Category::Condiments,
        &[
            "ketchup", "mustard", "mayonnaise", "soy sauce", "hot sauce", "salsa", "dressing",
            "relish", "bbq sauce",
        ],
    ),
];

/// Maps an ingredient name to its store section
///
/// A keyword matches when either string contains the other, ignoring case,
/// so "cherry tomato" and "tomato" both land in produce. Blank names are
/// `Other`.
pub fn categorize(ingredient_name: &str) -> Category {
    let name = ingredient_name.trim().to_lowercase();
    if name.is_empty() {
        return Category::Other;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| name.contains(keyword) || keyword.contains(name.as_str()))
        })
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_keyword_matches() {
        assert_eq!(categorize("tomato"), Category::Produce);
        assert_eq!(categorize("milk"), Category::Dairy);
        assert_eq!(categorize("chicken"), Category::Protein);
        assert_eq!(categorize("flour"), Category::Pantry);
        assert_eq!(categorize("bread"), Category::Bread);
        assert_eq!(categorize("ketchup"), Category::Condiments);
    }

    #[test]
    fn test_name_containing_keyword() {
        assert_eq!(categorize("cherry tomato"), Category::Produce);
        assert_eq!(categorize("cheddar cheese"), Category::Dairy);
        assert_eq!(categorize("eggs"), Category::Protein);
        assert_eq!(categorize("extra virgin olive oil"), Category::Pantry);
    }

    #[test]
    fn test_keyword_containing_name() {
        // "toma" is a substring of "tomato"
        assert_eq!(categorize("toma"), Category::Produce);
        assert_eq!(categorize("mayo"), Category::Condiments);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("BUTTER"), Category::Dairy);
        assert_eq!(categorize("Soy Sauce"), Category::Condiments);
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // matches both produce ("green beans") and protein ("beans")
        assert_eq!(categorize("green beans"), Category::Produce);
        // matches both dairy ("butter") and nothing earlier
        assert_eq!(categorize("peanut butter"), Category::Dairy);
    }

    #[test]
    fn test_unmatched_is_other() {
        assert_eq!(categorize("saffron threads"), Category::Other);
        assert_eq!(categorize("unknown-item"), Category::Other);
    }

    #[test]
    fn test_blank_name_is_other() {
        assert_eq!(categorize(""), Category::Other);
        assert_eq!(categorize("   "), Category::Other);
    }
}
