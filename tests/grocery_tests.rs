use std::sync::Arc;

use mockall::{mock, predicate::eq, Sequence};

use cooking_api::error::{AppError, AppResult};
use cooking_api::models::RecipeRef;
use cooking_api::services::{GroceryAggregator, GroceryOptions, RecipeLookup};

mock! {
    pub Lookup {}

    #[async_trait::async_trait]
    impl RecipeLookup for Lookup {
        async fn get_recipe_by_id(&self, id: u32) -> AppResult<RecipeRef>;
        fn name(&self) -> &'static str;
    }
}

fn recipe(id: u32, name: &str, servings: u32, cooking_time: u32, ingredients: &[&str]) -> RecipeRef {
    RecipeRef {
        id,
        name: name.to_string(),
        servings,
        cooking_time,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
    }
}

fn expect_recipe(lookup: &mut MockLookup, seq: &mut Sequence, r: RecipeRef) {
    lookup
        .expect_get_recipe_by_id()
        .with(eq(r.id))
        .times(1)
        .in_sequence(seq)
        .returning(move |_| Ok(r.clone()));
}

#[tokio::test]
async fn test_recipes_fetched_once_each_in_input_order() {
    let mut lookup = MockLookup::new();
    let mut seq = Sequence::new();
    lookup.expect_name().return_const("mock");

    expect_recipe(&mut lookup, &mut seq, recipe(3, "Soup", 4, 40, &["onion", "broth"]));
    expect_recipe(&mut lookup, &mut seq, recipe(1, "Salad", 2, 10, &["lettuce", "onion"]));

    let aggregator = GroceryAggregator::new(Arc::new(lookup));
    let list = tokio_test::assert_ok!(
        aggregator
            .generate_grocery_list(&[3, 1], &GroceryOptions::default())
            .await
    );

    let names: Vec<&str> = list.recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Soup", "Salad"]);

    let onion = list.ingredients.get("onion").unwrap();
    let contributors: Vec<u32> = onion.contributing_recipes.iter().map(|c| c.recipe_id).collect();
    assert_eq!(contributors, vec![3, 1]);
}

#[tokio::test]
async fn test_upstream_failure_aborts_remaining_lookups() {
    let mut lookup = MockLookup::new();
    let mut seq = Sequence::new();
    lookup.expect_name().return_const("mock");

    expect_recipe(&mut lookup, &mut seq, recipe(1, "Omelet", 2, 10, &["eggs"]));
    lookup
        .expect_get_recipe_by_id()
        .with(eq(2))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|id| {
            Err(AppError::UpstreamUnavailable {
                recipe_id: id,
                reason: "connection refused".to_string(),
            })
        });
    lookup.expect_get_recipe_by_id().with(eq(3)).never();

    let aggregator = GroceryAggregator::new(Arc::new(lookup));
    let err = tokio_test::assert_err!(
        aggregator
            .generate_grocery_list(&[1, 2, 3], &GroceryOptions::default())
            .await
    );

    assert!(matches!(
        err,
        AppError::UpstreamUnavailable { recipe_id: 2, .. }
    ));
}

#[tokio::test]
async fn test_not_found_propagates_unchanged() {
    let mut lookup = MockLookup::new();
    lookup.expect_name().return_const("mock");
    lookup
        .expect_get_recipe_by_id()
        .returning(|id| Err(AppError::RecipeNotFound(id)));

    let aggregator = GroceryAggregator::new(Arc::new(lookup));
    let err = aggregator
        .generate_grocery_list(&[42], &GroceryOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RecipeNotFound(42)));
}

#[tokio::test]
async fn test_invalid_ids_never_reach_lookup() {
    let mut lookup = MockLookup::new();
    lookup.expect_name().return_const("mock");
    lookup.expect_get_recipe_by_id().never();

    let aggregator = GroceryAggregator::new(Arc::new(lookup));
    let err = aggregator
        .generate_grocery_list(&[], &GroceryOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_scaling_rounds_up() {
    let mut lookup = MockLookup::new();
    let mut seq = Sequence::new();
    lookup.expect_name().return_const("mock");
    expect_recipe(&mut lookup, &mut seq, recipe(1, "Garlic Bread", 4, 15, &["garlic", "bread"]));

    let aggregator = GroceryAggregator::new(Arc::new(lookup));
    let options = GroceryOptions {
        servings: Some(6),
        ..Default::default()
    };
    let list = aggregator.generate_grocery_list(&[1], &options).await.unwrap();

    // garlic 3 * 1.5 = 4.5 -> 5, bread 1 * 1.5 -> 2
    assert_eq!(list.ingredients.get("garlic").unwrap().quantity, 5);
    assert_eq!(list.ingredients.get("bread").unwrap().quantity, 2);
}
