use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{assign_request_id, make_request_span};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/grocery", grocery_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(assign_request_id))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(CorsLayer::permissive()),
        )
}

/// Grocery routes under /api/grocery
fn grocery_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(handlers::generate_grocery_list))
        .route(
            "/generate-multiple",
            post(handlers::generate_multiple_grocery_list),
        )
        .route(
            "/category/:recipe_id",
            get(handlers::grocery_list_by_category),
        )
        .route("/check-availability", post(handlers::check_availability))
        .route("/simple", post(handlers::simple_list))
        .route("/checklist", post(handlers::checklist))
}
