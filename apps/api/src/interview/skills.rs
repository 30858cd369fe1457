//! Skill Vocabulary — the single source of detectable skills.
//!
//! Two matchers share one resource:
//! - `match_skills`: full lowercase vocabulary, sorted and deduplicated.
//! - `match_headline_skills`: the short capitalized list reported on upload,
//!   in headline order.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Versioned, immutable skill configuration. Loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillVocabulary {
    pub version: String,
    /// Lowercase phrases; matched as substrings of lowercased text.
    pub skills: Vec<String>,
    /// Display-cased subset reported by the résumé upload endpoint.
    pub headline_skills: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            skills: [
                "python",
                "java",
                "sql",
                "javascript",
                "react",
                "node",
                "django",
                "flask",
                "fastapi",
                "aws",
                "docker",
                "git",
                "linux",
                "data structures",
                "algorithms",
                "machine learning",
                "nlp",
                "pandas",
                "numpy",
                "rest api",
                "mongodb",
                "postgresql",
            ]
            .map(String::from)
            .to_vec(),
            headline_skills: ["Python", "Java", "React", "SQL", "Machine Learning"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl SkillVocabulary {
    /// Loads a JSON override. Entries in `skills` are lowercased on load.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary at {}", path.display()))?;
        let mut vocab: SkillVocabulary = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid skill vocabulary JSON in {}", path.display()))?;
        vocab.skills = vocab
            .skills
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        ensure!(!vocab.skills.is_empty(), "Skill vocabulary must not be empty");
        Ok(vocab)
    }

    /// Every vocabulary entry occurring anywhere in `text`, case-insensitively.
    /// Substring collisions are accepted ("nodejs" yields "node").
    pub fn match_skills(&self, text: &str) -> Vec<String> {
        let text_low = text.to_lowercase();
        self.skills
            .iter()
            .filter(|s| text_low.contains(s.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Headline skills present in `text`, in headline order and casing.
    pub fn match_headline_skills(&self, text: &str) -> Vec<String> {
        let text_low = text.to_lowercase();
        self.headline_skills
            .iter()
            .filter(|s| text_low.contains(&s.to_lowercase()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_are_sorted_not_vocabulary_order() {
        let vocab = SkillVocabulary::default();
        let found = vocab.match_skills("Shipped a React app backed by Python and SQL");
        assert_eq!(found, vec!["python", "react", "sql"]);
    }

    #[test]
    fn test_match_is_case_insensitive_and_phrase_aware() {
        let vocab = SkillVocabulary::default();
        let found = vocab.match_skills("Built a REST API; tuned MACHINE LEARNING models.");
        assert!(found.contains(&"rest api".to_string()));
        assert!(found.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_absent_skills_excluded() {
        let vocab = SkillVocabulary::default();
        let found = vocab.match_skills("Ruby on Rails and Elixir");
        assert!(found.is_empty(), "found {found:?}");
    }

    #[test]
    fn test_substring_collisions_are_accepted() {
        let vocab = SkillVocabulary::default();
        let found = vocab.match_skills("nodejs, javascript");
        // "javascript" contains "java"; "nodejs" contains "node".
        assert_eq!(found, vec!["java", "javascript", "node"]);
    }

    #[test]
    fn test_every_present_entry_is_found() {
        let vocab = SkillVocabulary::default();
        let text = vocab.skills.join(" | ").to_uppercase();
        let found = vocab.match_skills(&text);
        let mut expected = vocab.skills.clone();
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_duplicate_vocabulary_entries_deduplicated() {
        let vocab = SkillVocabulary {
            version: "test".into(),
            skills: vec!["go".into(), "rust".into(), "go".into()],
            headline_skills: vec![],
        };
        assert_eq!(vocab.match_skills("Rust and Go"), vec!["go", "rust"]);
    }

    #[test]
    fn test_substituted_vocabulary() {
        let vocab = SkillVocabulary {
            version: "test".into(),
            skills: vec!["kubernetes".into(), "terraform".into()],
            headline_skills: vec!["Kubernetes".into()],
        };
        assert_eq!(vocab.match_skills("Python and Terraform"), vec!["terraform"]);
        assert!(vocab.match_headline_skills("python").is_empty());
    }

    #[test]
    fn test_headline_matcher_keeps_list_order_and_casing() {
        let vocab = SkillVocabulary::default();
        let found = vocab.match_headline_skills("sql, machine learning, react and python");
        assert_eq!(found, vec!["Python", "React", "SQL", "Machine Learning"]);
    }

    #[test]
    fn test_headline_matcher_java_collision() {
        let vocab = SkillVocabulary::default();
        assert_eq!(vocab.match_headline_skills("JavaScript"), vec!["Java"]);
    }

    #[test]
    fn test_load_override_lowercases_skills() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        std::fs::write(
            &path,
            r#"{"version":"v2","skills":[" Rust ","Go",""],"headline_skills":["Rust"]}"#,
        )
        .unwrap();
        let vocab = SkillVocabulary::load(&path).unwrap();
        assert_eq!(vocab.version, "v2");
        assert_eq!(vocab.skills, vec!["rust", "go"]);
    }

    #[test]
    fn test_load_rejects_empty_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        std::fs::write(&path, r#"{"version":"v2","skills":[],"headline_skills":[]}"#).unwrap();
        assert!(SkillVocabulary::load(&path).is_err());
    }
}
