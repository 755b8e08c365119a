use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Success envelope shared by every endpoint
///
/// Errors use the same shape with `success: false` and an `error` message;
/// see `AppError`'s `IntoResponse`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
