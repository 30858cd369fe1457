use std::sync::Arc;

use crate::config::Config;
use crate::interview::questions::QuestionBank;
use crate::interview::skills::SkillVocabulary;
use crate::sentiment::SentimentScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub vocabulary: Arc<SkillVocabulary>,
    pub question_bank: Arc<QuestionBank>,
    /// Pluggable sentiment backend. Default: VaderScorer over the provisioned lexicon.
    pub sentiment: Arc<dyn SentimentScorer>,
    /// Entry count of the loaded lexicon, reported by /health.
    pub lexicon_entries: usize,
}
