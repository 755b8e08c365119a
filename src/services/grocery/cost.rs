/// Charged for ingredients missing from the price table
pub const DEFAULT_PRICE: f64 = 2.50;

/// Average shelf price per ingredient; keys are lowercase.
static AVERAGE_PRICES: &[(&str, f64)] = &[
    ("eggs", 3.50),
    ("milk", 3.00),
    ("butter", 4.50),
    ("cheese", 5.00),
    ("flour", 2.50),
    ("sugar", 2.00),
    ("salt", 1.00),
    ("pepper", 2.00),
    ("olive oil", 7.00),
    ("oil", 4.00),
    ("garlic", 0.75),
    ("onion", 1.00),
    ("tomato", 1.50),
    ("tomatoes", 3.00),
    ("potato", 1.00),
    ("potatoes", 3.50),
    ("carrot", 0.50),
    ("lettuce", 2.00),
    ("chicken", 8.00),
    ("chicken breast", 9.00),
    ("beef", 9.50),
    ("ground beef", 7.00),
    ("bacon", 6.00),
    ("salmon", 12.00),
    ("rice", 3.00),
    ("pasta", 1.75),
    ("spaghetti", 1.75),
    ("bread", 3.00),
    ("tortillas", 3.25),
    ("cream", 3.50),
    ("yogurt", 1.25),
    ("lemon", 0.75),
    ("basil", 2.25),
    ("parsley", 1.50),
    ("soy sauce", 3.00),
    ("ketchup", 2.75),
    ("mayonnaise", 4.00),
    ("mustard", 2.25),
    ("honey", 6.50),
    ("baking powder", 2.00),
];

fn price_of(ingredient_name: &str) -> f64 {
    let needle = ingredient_name.trim().to_lowercase();
    AVERAGE_PRICES
        .iter()
        .find(|(key, _)| *key == needle)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_PRICE)
}

/// Rough total cost of buying every ingredient once, rounded to cents
pub fn estimate_cost<I, S>(ingredient_names: I) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let total: f64 = ingredient_names
        .into_iter()
        .map(|name| price_of(name.as_ref()))
        .sum();

    (total * 100.0).round() / 100.0
}
