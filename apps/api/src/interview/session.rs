//! Session Summary — rolls up evaluated answers from one rehearsal.

use serde::{Deserialize, Serialize};

use crate::interview::evaluation::round2;

/// Minimum number of evaluations a tip must appear in to count as recurring.
const RECURRING_TIP_MIN: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluatedAnswer {
    pub question: String,
    pub score: f64,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub evaluations: Vec<EvaluatedAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub overall_score: f64,
    pub answered: usize,
    pub total_questions: usize,
    pub weakest_question: Option<String>,
    pub recurring_tips: Vec<String>,
}

pub fn summarize_session(session: &SessionRequest) -> SessionSummary {
    let evaluations = &session.evaluations;

    let overall_score = if evaluations.is_empty() {
        0.0
    } else {
        round2(evaluations.iter().map(|e| e.score).sum::<f64>() / evaluations.len() as f64)
    };

    // First minimum wins on ties.
    let weakest_question = evaluations
        .iter()
        .fold(None::<&EvaluatedAnswer>, |lowest, e| match lowest {
            Some(l) if l.score <= e.score => Some(l),
            _ => Some(e),
        })
        .map(|e| e.question.clone());

    let mut tip_counts: Vec<(&str, usize)> = Vec::new();
    for e in evaluations {
        let mut seen: Vec<&str> = Vec::new();
        for tip in e.tips.iter().map(String::as_str) {
            if seen.contains(&tip) {
                continue;
            }
            seen.push(tip);
            match tip_counts.iter_mut().find(|(t, _)| *t == tip) {
                Some((_, n)) => *n += 1,
                None => tip_counts.push((tip, 1)),
            }
        }
    }
    let recurring_tips = tip_counts
        .into_iter()
        .filter(|(_, n)| *n >= RECURRING_TIP_MIN)
        .map(|(t, _)| t.to_string())
        .collect();

    SessionSummary {
        overall_score,
        answered: evaluations.len(),
        total_questions: session.questions.len(),
        weakest_question,
        recurring_tips,
    }
}
