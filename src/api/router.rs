use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, users};
use crate::api::state::AppState;

/// Builds the application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // User routes (token guarded)
        .route("/users", get(users::get_all).post(users::store))
        .route(
            "/users/:id",
            get(users::get_by_id)
                .put(users::update)
                .patch(users::patch)
                .delete(users::delete),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
