//! Answer Evaluator — sentiment, keyword coverage, combined score and tips.

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentScorer;

pub const CONFIDENCE_TIP: &str = "Sound more confident and positive.";
pub const KEYWORD_TIP: &str =
    "Include more relevant keywords from your resume or the job description.";
pub const BREVITY_TIP: &str = "Add concrete examples and outcomes (numbers, impact).";

const CONFIDENCE_THRESHOLD: f64 = 0.1;
const COVERAGE_THRESHOLD: f64 = 0.5;
const MIN_ANSWER_WORDS: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerSubmission {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub expected_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Compound polarity in [-1, 1].
    pub sentiment: f64,
    /// Fraction of expected keywords present, in [0, 1]. 0.0 when none were expected.
    pub keyword_coverage: f64,
    /// round2(0.5 * max(sentiment, 0) + 0.5 * keyword_coverage)
    pub score: f64,
    pub tips: Vec<String>,
}

/// Scores one answer. Never fails: empty input yields low scores and tips.
pub fn evaluate_answer(
    scorer: &dyn SentimentScorer,
    answer: &str,
    expected_keywords: &[String],
) -> EvaluationResult {
    let sentiment = scorer.compound(answer);
    let keyword_coverage = keyword_coverage(answer, expected_keywords);

    let mut tips = Vec::new();
    if sentiment < CONFIDENCE_THRESHOLD {
        tips.push(CONFIDENCE_TIP.to_string());
    }
    if !expected_keywords.is_empty() && keyword_coverage < COVERAGE_THRESHOLD {
        tips.push(KEYWORD_TIP.to_string());
    }
    if answer.split_whitespace().count() < MIN_ANSWER_WORDS {
        tips.push(BREVITY_TIP.to_string());
    }

    EvaluationResult {
        sentiment,
        keyword_coverage,
        score: combined_score(sentiment, keyword_coverage),
        tips,
    }
}

/// Share of `keywords` found (case-insensitive substring) in `answer`, rounded to 2 decimals.
pub fn keyword_coverage(answer: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let answer_low = answer.to_lowercase();
    let hits = keywords
        .iter()
        .filter(|k| answer_low.contains(&k.to_lowercase()))
        .count();
    round2(hits as f64 / keywords.len() as f64)
}

/// Negative sentiment earns nothing but cannot pull the score below zero.
pub fn combined_score(sentiment: f64, coverage: f64) -> f64 {
    round2(0.5 * sentiment.max(0.0) + 0.5 * coverage)
}

/// Two decimals, nearest with exact ties to even (1/8 -> 0.12).
pub(crate) fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}
