use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::handlers::{
    forgot_password_handler, health_handler, metrics_handler, password_check_handler,
    username_check_handler,
};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/auth/forgot-password", post(forgot_password_handler))
        .route("/auth/password/validate", post(password_check_handler))
        .route("/auth/username/validate", post(username_check_handler))
        .fallback(handler_404)
        .with_state(state)
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
}
