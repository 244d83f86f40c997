//! The analysis request and its structural validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

pub const NAME_LABEL: &str = "الاسم";
pub const MOTHER_LABEL: &str = "اسم الأم";
pub const QUESTION_LABEL: &str = "السؤال";

/// Flags that shape the prompt and the level of detail in the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisOptions {
    /// Ask the oracle for a longer, multi-layered reading.
    pub deep_analysis: bool,
    /// Include per-letter breakdowns in the response and the prompt.
    pub numerology_details: bool,
    /// Tie the reading explicitly to the wording of the question.
    pub contextual_interpretation: bool,
}

/// One analysis request as received from a client.
///
/// All fields are free text. Only emptiness is checked; a "valid name" is
/// whatever the person typed.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "mother")]
    pub mother_name: String,
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub options: AnalysisOptions,
    /// Oracle credential supplied in the body rather than a header.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl fmt::Debug for AnalysisRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisRequest")
            .field("name", &self.name)
            .field("mother_name", &self.mother_name)
            .field("question", &self.question)
            .field("birth_date", &self.birth_date)
            .field("options", &self.options)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AnalysisRequest {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mother_name: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mother_name: mother_name.into(),
            question: question.into(),
            ..Self::default()
        }
    }

    /// Check that the three required fields are non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingFields`] with the Arabic labels of every
    /// missing field, in form order.
    pub fn validate(&self) -> Result<(), CoreError> {
        let missing: Vec<&'static str> = [
            (NAME_LABEL, &self.name),
            (MOTHER_LABEL, &self.mother_name),
            (QUESTION_LABEL, &self.question),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::MissingFields(missing))
        }
    }

    /// Copy with every text field trimmed and a blank birth date dropped.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            mother_name: self.mother_name.trim().to_string(),
            question: self.question.trim().to_string(),
            birth_date: self
                .birth_date
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            options: self.options,
            api_key: self
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}
