//! `QuestionForm` extractor for POST /generate_questions.
//!
//! Accepts `application/x-www-form-urlencoded` and `multipart/form-data`
//! bodies with repeated `skills` fields and an optional `role`.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};

use crate::errors::AppError;

#[derive(Debug, Default, PartialEq)]
pub struct QuestionForm {
    pub skills: Vec<String>,
    pub role: Option<String>,
}

impl QuestionForm {
    /// Builds the form from raw (name, value) pairs in submission order.
    ///
    /// A `skills` value holding a JSON string array is expanded into its
    /// elements; blank skills are skipped. The last `role` wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = QuestionForm::default();
        for (name, value) in pairs {
            match name.as_str() {
                "skills" => form.push_skills(&value),
                "role" => form.role = Some(value),
                _ => {}
            }
        }
        form
    }

    fn push_skills(&mut self, value: &str) {
        let trimmed = value.trim();
        if trimmed.starts_with('[') {
            if let Ok(list) = serde_json::from_str::<Vec<String>>(trimmed) {
                self.skills
                    .extend(list.into_iter().filter(|s| !s.trim().is_empty()));
                return;
            }
        }
        if !trimmed.is_empty() {
            self.skills.push(value.to_string());
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for QuestionForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            let mut pairs = Vec::new();
            while let Some(field) = multipart.next_field().await? {
                let name = field.name().unwrap_or_default().to_string();
                pairs.push((name, field.text().await?));
            }
            return Ok(Self::from_pairs(pairs));
        }

        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(Self::from_pairs(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_skills_keep_order() {
        let form = QuestionForm::from_pairs(pairs(&[
            ("skills", "react"),
            ("role", "SRE"),
            ("skills", "python"),
        ]));
        assert_eq!(form.skills, vec!["react", "python"]);
        assert_eq!(form.role.as_deref(), Some("SRE"));
    }

    #[test]
    fn test_json_array_skills_are_expanded() {
        let form = QuestionForm::from_pairs(pairs(&[("skills", r#"["Python","SQL",""]"#)]));
        assert_eq!(form.skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_malformed_json_kept_literally() {
        let form = QuestionForm::from_pairs(pairs(&[("skills", "[python")]));
        assert_eq!(form.skills, vec!["[python"]);
    }

    #[test]
    fn test_blank_skills_and_unknown_fields_ignored() {
        let form = QuestionForm::from_pairs(pairs(&[("skills", "  "), ("other", "x")]));
        assert_eq!(form, QuestionForm::default());
    }
}
