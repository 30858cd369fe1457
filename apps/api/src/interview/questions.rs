//! Question Generator — deterministic interview questions from skills and role.
//!
//! Output layout:
//! 1. The bank's opening questions, always first.
//! 2. One question per skill for the first `MAX_SKILL_QUESTIONS` skills.
//! 3. An optional role-fit question, always last.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

pub const MAX_SKILL_QUESTIONS: usize = 6;

const SKILL_PLACEHOLDER: &str = "{skill}";
const ROLE_PLACEHOLDER: &str = "{role}";

/// Skills sharing one question template. `skills` are lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCategory {
    pub name: String,
    pub skills: Vec<String>,
    /// May contain `{skill}`; a template without it is used verbatim.
    pub template: String,
}

/// Versioned question templates. Loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub version: String,
    pub opening: Vec<String>,
    pub categories: Vec<QuestionCategory>,
    pub generic_template: String,
    pub role_template: String,
}

impl Default for QuestionBank {
    fn default() -> Self {
        let category = |name: &str, skills: &[&str], template: &str| QuestionCategory {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            template: template.to_string(),
        };

        Self {
            version: "v1".to_string(),
            opening: vec![
                "Tell me about a challenging project and your specific impact.".to_string(),
                "Describe a time you received constructive feedback and what you changed."
                    .to_string(),
            ],
            categories: vec![
                category(
                    "error_handling",
                    &["python", "java", "javascript"],
                    "In {skill}, how do you manage errors and exceptions in production?",
                ),
                category(
                    "data_modeling",
                    &["sql", "postgresql", "mongodb"],
                    "Design a schema or query to fetch the top N records efficiently using {skill}.",
                ),
                category(
                    "state_management",
                    &["react"],
                    "How do you manage state in React across complex components?",
                ),
                category(
                    "deployment",
                    &["aws", "docker"],
                    "Walk through deploying a small service with {skill}.",
                ),
                category(
                    "data_pipeline",
                    &["machine learning", "nlp", "pandas", "numpy"],
                    "Explain a pipeline you built using {skill}, and how you validated results.",
                ),
            ],
            generic_template: "What are best practices you follow when working with {skill}?"
                .to_string(),
            role_template: "What makes you a fit for the {role} role?".to_string(),
        }
    }
}

impl QuestionBank {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank at {}", path.display()))?;
        let bank: QuestionBank = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid question bank JSON in {}", path.display()))?;
        ensure!(
            bank.role_template.contains(ROLE_PLACEHOLDER),
            "Question bank role_template must contain {ROLE_PLACEHOLDER}"
        );
        Ok(bank)
    }

    /// Template for a skill; classification ignores case and surrounding whitespace.
    fn template_for(&self, skill: &str) -> &str {
        let key = skill.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.skills.iter().any(|s| *s == key))
            .map(|c| c.template.as_str())
            .unwrap_or(self.generic_template.as_str())
    }

    /// Builds the question list. Only the first `MAX_SKILL_QUESTIONS` skills are used;
    /// a blank role adds nothing.
    pub fn generate(&self, skills: &[String], role: Option<&str>) -> Vec<String> {
        let mut questions = self.opening.clone();

        questions.extend(
            skills
                .iter()
                .take(MAX_SKILL_QUESTIONS)
                .map(|skill| self.template_for(skill).replace(SKILL_PLACEHOLDER, skill)),
        );

        if let Some(role) = role.map(str::trim).filter(|r| !r.is_empty()) {
            questions.push(self.role_template.replace(ROLE_PLACEHOLDER, role));
        }

        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_opening_questions_always_first() {
        let bank = QuestionBank::default();
        let qs = bank.generate(&[], None);
        assert_eq!(qs.len(), 2);
        assert!(qs[0].starts_with("Tell me about a challenging project"));
        assert!(qs[1].starts_with("Describe a time you received constructive feedback"));
    }

    #[test]
    fn test_mixed_skills_with_role() {
        let bank = QuestionBank::default();
        let qs = bank.generate(
            &skills(&["python", "react", "aws", "role-irrelevant-skill"]),
            Some("Backend Engineer"),
        );

        assert_eq!(qs.len(), 7);
        assert_eq!(qs[..2], bank.opening[..]);
        assert_eq!(
            qs[2],
            "In python, how do you manage errors and exceptions in production?"
        );
        assert_eq!(
            qs[3],
            "How do you manage state in React across complex components?"
        );
        assert_eq!(qs[4], "Walk through deploying a small service with aws.");
        assert_eq!(
            qs[5],
            "What are best practices you follow when working with role-irrelevant-skill?"
        );
        assert_eq!(qs[6], "What makes you a fit for the Backend Engineer role?");
    }

    #[test]
    fn test_each_category_template() {
        let bank = QuestionBank::default();
        let qs = bank.generate(&skills(&["postgresql", "numpy", "java", "docker"]), None);
        assert_eq!(
            qs[2],
            "Design a schema or query to fetch the top N records efficiently using postgresql."
        );
        assert_eq!(
            qs[3],
            "Explain a pipeline you built using numpy, and how you validated results."
        );
        assert!(qs[4].starts_with("In java,"));
        assert_eq!(qs[5], "Walk through deploying a small service with docker.");
    }

    #[test]
    fn test_classification_ignores_case_but_keeps_display_name() {
        let bank = QuestionBank::default();
        let qs = bank.generate(&skills(&["Python", "Machine Learning"]), None);
        assert_eq!(
            qs[2],
            "In Python, how do you manage errors and exceptions in production?"
        );
        assert_eq!(
            qs[3],
            "Explain a pipeline you built using Machine Learning, and how you validated results."
        );
    }

    #[test]
    fn test_only_first_six_skills_used() {
        let bank = QuestionBank::default();
        let many = skills(&["git", "linux", "flask", "django", "node", "nlp", "sql", "react"]);
        let qs = bank.generate(&many, None);
        assert_eq!(qs.len(), 2 + MAX_SKILL_QUESTIONS);
        assert!(qs.iter().all(|q| !q.contains("sql") && !q.contains("React")));
    }

    #[test]
    fn test_blank_role_is_ignored() {
        let bank = QuestionBank::default();
        assert_eq!(bank.generate(&skills(&["git"]), Some("   ")).len(), 3);
        assert_eq!(bank.generate(&skills(&["git"]), Some("")).len(), 3);
    }

    #[test]
    fn test_role_is_trimmed() {
        let bank = QuestionBank::default();
        let qs = bank.generate(&[], Some("  Data Engineer \n"));
        assert_eq!(qs.last().unwrap(), "What makes you a fit for the Data Engineer role?");
    }

    #[test]
    fn test_length_formula_and_determinism() {
        let bank = QuestionBank::default();
        let all = skills(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        for n in 0..=all.len() {
            for role in [None, Some("SRE")] {
                let first = bank.generate(&all[..n], role);
                let second = bank.generate(&all[..n], role);
                assert_eq!(first, second);
                let expected = 2 + n.min(MAX_SKILL_QUESTIONS) + usize::from(role.is_some());
                assert_eq!(first.len(), expected);
            }
        }
    }

    #[test]
    fn test_skill_order_matters() {
        let bank = QuestionBank::default();
        let a = bank.generate(&skills(&["react", "aws"]), None);
        let b = bank.generate(&skills(&["aws", "react"]), None);
        assert_ne!(a, b);
        assert_eq!(a[2], b[3]);
    }

    #[test]
    fn test_load_requires_role_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        let mut bank = QuestionBank::default();
        bank.role_template = "Why this role?".to_string();
        std::fs::write(&path, serde_json::to_string(&bank).unwrap()).unwrap();
        assert!(QuestionBank::load(&path).is_err());

        bank.role_template = "Why {role}?".to_string();
        std::fs::write(&path, serde_json::to_string(&bank).unwrap()).unwrap();
        assert_eq!(QuestionBank::load(&path).unwrap(), bank);
    }
}
