mod config;
mod errors;
mod interview;
mod routes;
mod sentiment;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interview::questions::QuestionBank;
use crate::interview::skills::SkillVocabulary;
use crate::routes::build_router;
use crate::sentiment::VaderScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = match &config.skill_vocabulary_path {
        Some(path) => SkillVocabulary::load(path)?,
        None => SkillVocabulary::default(),
    };
    info!(
        "Skill vocabulary {} ({} skills, {} headline)",
        vocabulary.version,
        vocabulary.skills.len(),
        vocabulary.headline_skills.len()
    );

    let question_bank = match &config.question_bank_path {
        Some(path) => QuestionBank::load(path)?,
        None => QuestionBank::default(),
    };
    info!("Question bank {}", question_bank.version);

    // No request can be served without the lexicon: failure here aborts startup.
    let lexicon = sentiment::provision(&config.lexicon_path, &config.lexicon_url)
        .await
        .context("Sentiment lexicon could not be provisioned")?;
    let scorer = VaderScorer::new(lexicon);
    let lexicon_entries = scorer.lexicon().len();

    let state = AppState {
        config: config.clone(),
        vocabulary: Arc::new(vocabulary),
        question_bank: Arc::new(question_bank),
        sentiment: Arc::new(scorer),
        lexicon_entries,
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
