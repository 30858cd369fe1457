//! Sentiment scoring for interview answers.
//!
//! `AppState` carries an `Arc<dyn SentimentScorer>` built once at startup;
//! handlers never construct scorers themselves.

pub mod lexicon;
pub mod vader;

pub use lexicon::provision;
pub use vader::VaderScorer;

/// Produces a compound polarity score in [-1, 1] for free text.
/// 0.0 means neutral or no sentiment-bearing words.
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}
