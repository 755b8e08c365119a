use axum::{
    extract::{rejection::PathRejection, Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{CategorizedIngredients, ChecklistSection, GroceryList, IngredientAvailability},
    services::{
        grocery::{to_checklist, to_simple_list},
        GroceryOptions,
    },
};

use super::{
    requests::{
        AvailabilityRequest, CategoryQuery, GroceryListRequest, MultipleGroceryListRequest,
        ValidatedJson, ValidatedQuery,
    },
    ApiResponse, AppState,
};

type ApiResult<T> = AppResult<Json<ApiResponse<T>>>;

impl From<GroceryListRequest> for GroceryOptions {
    fn from(request: GroceryListRequest) -> Self {
        Self {
            servings: request.servings,
            exclude_ingredients: request.exclude_ingredients.unwrap_or_default(),
        }
    }
}

async fn build_list(state: &AppState, request: GroceryListRequest) -> AppResult<GroceryList> {
    let recipe_ids = request.recipe_ids.to_ids();
    let options = GroceryOptions::from(request);
    state
        .grocery
        .generate_grocery_list(&recipe_ids, &options)
        .await
}

/// Health check endpoint
pub async fn health_check() -> Json<ApiResponse<Value>> {
    ApiResponse::ok(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
    }))
}

/// Grocery list for one or more recipes
pub async fn generate_grocery_list(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ValidatedJson(request): ValidatedJson<GroceryListRequest>,
) -> ApiResult<GroceryList> {
    tracing::info!(
        request_id = %request_id,
        recipe_ids = ?request.recipe_ids,
        servings = ?request.servings,
        "Processing grocery list request"
    );

    let list = build_list(&state, request).await?;
    Ok(ApiResponse::ok(list))
}

/// Grocery list with a serving override per recipe
pub async fn generate_multiple_grocery_list(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ValidatedJson(request): ValidatedJson<MultipleGroceryListRequest>,
) -> ApiResult<GroceryList> {
    tracing::info!(
        request_id = %request_id,
        recipe_ids = ?request.recipe_ids,
        overrides = request.servings.len(),
        "Processing multi-recipe grocery list request"
    );

    let list = state
        .grocery
        .generate_multiple_grocery_list(&request.recipe_ids.to_ids(), &request.servings)
        .await?;
    Ok(ApiResponse::ok(list))
}

/// Categorized ingredients for a single recipe
pub async fn grocery_list_by_category(
    State(state): State<AppState>,
    recipe_id: Result<Path<u32>, PathRejection>,
    ValidatedQuery(query): ValidatedQuery<CategoryQuery>,
) -> ApiResult<CategorizedIngredients> {
    let Path(recipe_id) = recipe_id.map_err(|_| {
        AppError::InvalidInput("recipe id must be a positive integer".to_string())
    })?;

    let categorized = state
        .grocery
        .generate_grocery_list_by_category(recipe_id, query.servings)
        .await?;
    Ok(ApiResponse::ok(categorized))
}

/// Which ingredients the store reference list knows about
pub async fn check_availability(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AvailabilityRequest>,
) -> ApiResult<Vec<IngredientAvailability>> {
    let availability = state
        .grocery
        .check_ingredient_availability(&request.ingredients);
    Ok(ApiResponse::ok(availability))
}

/// Grocery list as plain `"<quantity> <unit> <name>"` lines
pub async fn simple_list(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GroceryListRequest>,
) -> ApiResult<Vec<String>> {
    let list = build_list(&state, request).await?;
    Ok(ApiResponse::ok(to_simple_list(&list)))
}

/// Grocery list as an unchecked checklist grouped by store section
pub async fn checklist(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GroceryListRequest>,
) -> ApiResult<Vec<ChecklistSection>> {
    let list = build_list(&state, request).await?;
    Ok(ApiResponse::ok(to_checklist(&list)))
}
