//! VADER lexicon loading and one-time provisioning.
//!
//! The lexicon is acquired once, before the router is built:
//! local file → fetch from upstream and cache → fatal.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

const FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write lexicon to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("lexicon source returned status {0}")]
    Status(u16),

    #[error("lexicon contains no usable entries")]
    Empty,
}

/// Token → mean valence, as published in `vader_lexicon.txt`.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// Parses the tab-separated VADER format (`token\tmean\tstddev\t[ratings]`).
    /// Lines without a numeric second column are skipped.
    pub fn parse(raw: &str) -> Result<Self, LexiconError> {
        let lexicon = Self {
            valences: raw
                .lines()
                .filter_map(|line| {
                    let mut cols = line.split('\t');
                    let token = cols.next()?.trim();
                    let mean = cols.next()?.trim().parse::<f64>().ok()?;
                    (!token.is_empty()).then(|| (token.to_lowercase(), mean))
                })
                .collect(),
        };

        if lexicon.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(lexicon)
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    /// Valence for an already-lowercased token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

#[cfg(test)]
impl Lexicon {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            valences: entries
                .into_iter()
                .map(|(token, v)| (token.into().to_lowercase(), v))
                .collect(),
        }
    }
}

/// Loads the lexicon from `path`, fetching it from `url` once if the local
/// copy is missing or unusable. Only a parseable download is cached.
/// A second failure is returned to the caller, which treats it as fatal.
pub async fn provision(path: &Path, url: &str) -> Result<Lexicon, LexiconError> {
    match Lexicon::load(path) {
        Ok(lexicon) => {
            info!(entries = lexicon.len(), path = %path.display(), "Sentiment lexicon loaded");
            return Ok(lexicon);
        }
        Err(e) => warn!("Sentiment lexicon unavailable locally ({e}); fetching from {url}"),
    }

    let raw = fetch(url).await?;
    let lexicon = Lexicon::parse(&raw)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| LexiconError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(path, &raw)
        .await
        .map_err(|source| LexiconError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(entries = lexicon.len(), path = %path.display(), "Sentiment lexicon provisioned");
    Ok(lexicon)
}

async fn fetch(url: &str) -> Result<String, LexiconError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LexiconError::Status(status.as_u16()));
    }
    Ok(resp.text().await?)
}
