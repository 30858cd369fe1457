//! Axum route handlers for the interview rehearsal API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::interview::evaluation::{evaluate_answer, AnswerSubmission, EvaluationResult};
use crate::interview::extract::{extract_text, preview};
use crate::interview::form::QuestionForm;
use crate::interview::session::{summarize_session, SessionRequest, SessionSummary};
use crate::interview::skills::SkillVocabulary;
use crate::state::AppState;

/// Characters of extracted text echoed back on upload.
pub const RESUME_PREVIEW_CHARS: usize = 500;

const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub skills: Vec<String>,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload_resume
///
/// Extracts text from the `file` field and reports the headline skills found in it.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        info!(filename = %filename, bytes = bytes.len(), "Resume uploaded");

        let text = extract_text(bytes, &filename).await;
        let skills = state.vocabulary.match_headline_skills(&text);
        info!(chars = text.len(), skills = skills.len(), "Resume processed");

        return Ok(Json(UploadResumeResponse {
            skills,
            resume_text: preview(&text, RESUME_PREVIEW_CHARS),
        }));
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// POST /generate_questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    form: QuestionForm,
) -> Json<QuestionsResponse> {
    let questions = state
        .question_bank
        .generate(&form.skills, form.role.as_deref());
    info!(
        skills = form.skills.len(),
        questions = questions.len(),
        "Questions generated"
    );
    Json(QuestionsResponse { questions })
}

/// POST /evaluate_answer
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(submission): Json<AnswerSubmission>,
) -> Json<EvaluationResult> {
    let result = evaluate_answer(
        state.sentiment.as_ref(),
        &submission.answer,
        &submission.expected_keywords,
    );
    debug!(
        question = %submission.question,
        score = result.score,
        tips = result.tips.len(),
        "Answer evaluated"
    );
    Json(result)
}

/// POST /session_summary
pub async fn handle_session_summary(Json(session): Json<SessionRequest>) -> Json<SessionSummary> {
    Json(summarize_session(&session))
}

/// GET /skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillVocabulary> {
    Json(state.vocabulary.as_ref().clone())
}
