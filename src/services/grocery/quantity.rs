/// Shopping quantity suggested for one ingredient
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityEstimate {
    pub amount: u32,
    pub unit: &'static str,
    pub notes: &'static str,
}

struct BaseQuantity {
    amount: f64,
    unit: &'static str,
    notes: &'static str,
}

const fn base(amount: f64, unit: &'static str, notes: &'static str) -> BaseQuantity {
    BaseQuantity {
        amount,
        unit,
        notes,
    }
}

static DEFAULT_QUANTITY: BaseQuantity = base(1.0, "item", "Check recipe for specific amount");

/// Typical purchase quantity for a recipe at its native serving count.
/// Keys are lowercase.
static BASE_QUANTITIES: &[(&str, BaseQuantity)] = &[
    ("eggs", base(6.0, "pieces", "Large eggs")),
    ("milk", base(1.0, "liter", "Whole or 2%")),
    ("butter", base(1.0, "stick", "Unsalted preferred")),
    ("cheese", base(200.0, "grams", "Cheddar or as preferred")),
    ("flour", base(2.0, "cups", "All-purpose")),
    ("sugar", base(1.0, "cup", "Granulated")),
    ("salt", base(1.0, "teaspoon", "Table or kosher")),
    ("pepper", base(1.0, "teaspoon", "Freshly ground")),
    ("olive oil", base(2.0, "tablespoons", "Extra virgin")),
    ("oil", base(2.0, "tablespoons", "Vegetable or canola")),
    ("garlic", base(3.0, "cloves", "Fresh")),
    ("onion", base(1.0, "pieces", "Yellow or white")),
    ("tomato", base(2.0, "pieces", "Ripe")),
    ("tomatoes", base(2.0, "pieces", "Ripe")),
    ("potato", base(3.0, "pieces", "Russet or Yukon Gold")),
    ("potatoes", base(3.0, "pieces", "Russet or Yukon Gold")),
    ("carrot", base(2.0, "pieces", "Medium")),
    ("lettuce", base(1.0, "head", "Romaine or iceberg")),
    ("chicken", base(500.0, "grams", "Boneless breast or thigh")),
    ("chicken breast", base(2.0, "pieces", "Boneless, skinless")),
    ("beef", base(500.0, "grams", "Ground or stewing")),
    ("ground beef", base(500.0, "grams", "80/20 lean")),
    ("bacon", base(200.0, "grams", "Thick cut")),
    ("salmon", base(2.0, "fillets", "Skin-on")),
    ("rice", base(1.0, "cup", "Long grain")),
    ("pasta", base(250.0, "grams", "Any shape")),
    ("spaghetti", base(250.0, "grams", "Dried")),
    ("bread", base(1.0, "loaf", "Sliced")),
    ("tortillas", base(8.0, "pieces", "Flour or corn")),
    ("cream", base(0.5, "cup", "Heavy cream")),
    ("yogurt", base(1.0, "cup", "Plain")),
    ("lemon", base(1.0, "pieces", "Fresh")),
    ("basil", base(1.0, "bunch", "Fresh leaves")),
    ("parsley", base(1.0, "bunch", "Flat-leaf")),
    ("soy sauce", base(2.0, "tablespoons", "Low sodium optional")),
    ("ketchup", base(0.25, "cup", "Any brand")),
    ("mayonnaise", base(0.25, "cup", "Full fat")),
    ("mustard", base(1.0, "tablespoon", "Dijon or yellow")),
    ("honey", base(2.0, "tablespoons", "Raw or clover")),
    ("baking powder", base(2.0, "teaspoons", "Double acting")),
];

fn lookup(ingredient_name: &str) -> &'static BaseQuantity {
    let needle = ingredient_name.trim().to_lowercase();
    BASE_QUANTITIES
        .iter()
        .find(|(key, _)| *key == needle)
        .map(|(_, q)| q)
        .unwrap_or(&DEFAULT_QUANTITY)
}

/// Estimates how much of `ingredient_name` to buy, scaled by `multiplier`
///
/// Amounts are rounded up so the list never suggests buying less than
/// needed; unit and notes are not scaled.
pub fn estimate_quantity(ingredient_name: &str, multiplier: f64) -> QuantityEstimate {
    let base = lookup(ingredient_name);
    let scaled = (base.amount * multiplier).ceil();

    QuantityEstimate {
        amount: if scaled < 1.0 { 1 } else { scaled as u32 },
        unit: base.unit,
        notes: base.notes,
    }
}
