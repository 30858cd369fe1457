pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::interview::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/skills", get(handlers::handle_list_skills))
        .route("/upload_resume", post(handlers::handle_upload_resume))
        .route(
            "/generate_questions",
            post(handlers::handle_generate_questions),
        )
        .route("/evaluate_answer", post(handlers::handle_evaluate_answer))
        .route("/session_summary", post(handlers::handle_session_summary))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        // Any origin, mirrored so credentialed requests are accepted.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
