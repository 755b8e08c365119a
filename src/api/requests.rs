use std::borrow::Cow;
use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;

const MAX_SERVINGS: u32 = 100;

/// One recipe id or a list of them
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RecipeIds {
    One(i64),
    Many(Vec<i64>),
}

impl RecipeIds {
    fn as_slice(&self) -> &[i64] {
        match self {
            RecipeIds::One(id) => std::slice::from_ref(id),
            RecipeIds::Many(ids) => ids,
        }
    }

    /// Ids as `u32`; only meaningful once the request has been validated
    pub fn to_ids(&self) -> Vec<u32> {
        self.as_slice()
            .iter()
            .filter_map(|&id| u32::try_from(id).ok())
            .collect()
    }
}

fn validate_recipe_ids(ids: &RecipeIds) -> Result<(), ValidationError> {
    let ids = ids.as_slice();
    if ids.is_empty() {
        return Err(ValidationError::new("empty")
            .with_message(Cow::Borrowed("at least one recipe id is required")));
    }
    if ids.iter().any(|&id| id <= 0 || u32::try_from(id).is_err()) {
        return Err(ValidationError::new("range")
            .with_message(Cow::Borrowed("recipe ids must be positive integers")));
    }
    Ok(())
}

fn validate_exclusions(names: &[String]) -> Result<(), ValidationError> {
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("excluded ingredient names must not be blank")));
    }
    Ok(())
}

fn validate_servings_map(servings: &HashMap<u32, u32>) -> Result<(), ValidationError> {
    if servings
        .iter()
        .any(|(&id, &s)| id == 0 || s == 0 || s > MAX_SERVINGS)
    {
        return Err(ValidationError::new("range").with_message(Cow::Borrowed(
            "servings must map positive recipe ids to values between 1 and 100",
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListRequest {
    #[validate(custom(function = "validate_recipe_ids"))]
    pub recipe_ids: RecipeIds,

    #[validate(range(min = 1, max = 100, message = "servings must be between 1 and 100"))]
    pub servings: Option<u32>,

    #[validate(custom(function = "validate_exclusions"))]
    pub exclude_ingredients: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MultipleGroceryListRequest {
    #[validate(custom(function = "validate_recipe_ids"))]
    pub recipe_ids: RecipeIds,

    /// Serving override per recipe id
    #[serde(default)]
    #[validate(custom(function = "validate_servings_map"))]
    pub servings: HashMap<u32, u32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryQuery {
    #[validate(range(min = 1, max = 100, message = "servings must be between 1 and 100"))]
    pub servings: Option<u32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AvailabilityRequest {
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<String>,
}

/// Flattens validator output into one readable line, fields in name order
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{}: {}", field, message)
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// JSON body that has been deserialized and validated
///
/// Malformed bodies and failed validation are both reported as
/// `AppError::InvalidInput`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::InvalidInput(describe(&errors)))?;

        Ok(Self(value))
    }
}

/// Query string that has been deserialized and validated
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::InvalidInput(describe(&errors)))?;

        Ok(Self(value))
    }
}
