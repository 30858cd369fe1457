use std::path::PathBuf;

use anyhow::{Context, Result};

/// Upstream location of the VADER lexicon, used when the local copy is missing.
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

const DEFAULT_LEXICON_PATH: &str = "data/vader_lexicon.txt";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub lexicon_path: PathBuf,
    pub lexicon_url: String,
    /// Optional JSON override for the built-in skill vocabulary.
    pub skill_vocabulary_path: Option<PathBuf>,
    /// Optional JSON override for the built-in question bank.
    pub question_bank_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            lexicon_path: optional_env("LEXICON_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LEXICON_PATH)),
            lexicon_url: optional_env("LEXICON_URL")
                .unwrap_or_else(|| DEFAULT_LEXICON_URL.to_string()),
            skill_vocabulary_path: optional_env("SKILL_VOCABULARY_PATH").map(PathBuf::from),
            question_bank_path: optional_env("QUESTION_BANK_PATH").map(PathBuf::from),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            lexicon_path: PathBuf::from(DEFAULT_LEXICON_PATH),
            lexicon_url: DEFAULT_LEXICON_URL.to_string(),
            skill_vocabulary_path: None,
            question_bank_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Reads an env var, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
