use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to AI Interview Simulator API 🚀"
    }))
}

/// GET /health
/// Returns service status plus the versions of the loaded configuration.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "interview-api",
        "vocabulary_version": state.vocabulary.version,
        "question_bank_version": state.question_bank.version,
        "lexicon_entries": state.lexicon_entries,
    }))
}
