//! JSON response types returned by the Jafr HTTP API and CLI.
//!
//! All wire names are camelCase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::abjad::LetterValue;
use crate::element::Element;

/// Numerology of one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldResult {
    pub total: u64,
    pub reduced: u8,
    pub meaning: String,
    /// Per-letter breakdown, only when `numerologyDetails` was requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub letters: Vec<LetterValue>,
}

/// Everything computed locally. Always present in a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TraditionalResults {
    pub name: FieldResult,
    pub mother: FieldResult,
    pub question: FieldResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<FieldResult>,
    /// Name total plus mother total.
    pub combined_total: u64,
    /// `combined_total` reduced to one digit.
    pub reduced_value: u8,
    pub magic_square_size: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_element: Option<Element>,
}

pub const PLACEHOLDER_INTERPRETATION: &str =
    "التحليل بالذكاء الاصطناعي غير متاح حالياً، ويمكنك الاعتماد على النتائج التقليدية المرفقة.";
pub const PLACEHOLDER_GUIDANCE: &str = "الإرشاد الروحي غير متاح في الوقت الحالي.";
pub const PLACEHOLDER_RECOMMENDATIONS: &str = "التوصيات غير متاحة في الوقت الحالي.";

/// Narrative sections produced by the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub interpretation: String,
    pub spiritual_guidance: String,
    pub recommendations: String,
}

impl AiAnalysis {
    /// Fixed text used whenever the oracle is disabled or fails.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            interpretation: PLACEHOLDER_INTERPRETATION.to_string(),
            spiritual_guidance: PLACEHOLDER_GUIDANCE.to_string(),
            recommendations: PLACEHOLDER_RECOMMENDATIONS.to_string(),
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }

    /// True when every section is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.interpretation,
            &self.spiritual_guidance,
            &self.recommendations,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

/// Outcome of the oracle call for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AiState {
    Succeeded,
    Failed,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiStatus {
    pub state: AiState,
    /// Short failure kind such as `timeout` or `rate_limited`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Upstream `Retry-After` in seconds. A missing or non-numeric header
    /// is reported as the 60 second default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u64>,
}

impl AiStatus {
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            state: AiState::Succeeded,
            error: None,
            retry_after_secs: None,
        }
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            state: AiState::Disabled,
            error: None,
            retry_after_secs: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>, retry_after_secs: Option<u64>) -> Self {
        Self {
            state: AiState::Failed,
            error: Some(error.into()),
            retry_after_secs,
        }
    }
}

/// Response from `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub traditional_results: TraditionalResults,
    pub ai_analysis: AiAnalysis,
    pub ai_status: AiStatus,
    pub combined_interpretation: String,
}

impl AnalysisResponse {
    /// Assemble a successful response. The combined text is derived here.
    #[must_use]
    pub fn new(traditional: TraditionalResults, ai: AiAnalysis, status: AiStatus) -> Self {
        let combined_interpretation = combine(&traditional, &ai);
        Self {
            success: true,
            traditional_results: traditional,
            ai_analysis: ai,
            ai_status: status,
            combined_interpretation,
        }
    }
}

/// Response from `POST /api/numerology`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyResponse {
    pub success: bool,
    pub traditional_results: TraditionalResults,
}

/// Response from `POST /api/validate-key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeyValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
}

fn combine(traditional: &TraditionalResults, ai: &AiAnalysis) -> String {
    let mut out = format!(
        "مجموع الاسم واسم الأم {} ويختزل إلى {}، ويناسبه وفق من رتبة {}.\n\
         الاسم: {}\nالأم: {}\nالسؤال: {}",
        traditional.combined_total,
        traditional.reduced_value,
        traditional.magic_square_size,
        traditional.name.meaning,
        traditional.mother.meaning,
        traditional.question.meaning,
    );
    if let Some(birth) = &traditional.birth {
        out.push_str("\nالميلاد: ");
        out.push_str(&birth.meaning);
    }
    if let Some(element) = traditional.dominant_element {
        out.push_str("\nالطبع الغالب: ");
        out.push_str(element.arabic_name());
    }

    for section in [
        &ai.interpretation,
        &ai.spiritual_guidance,
        &ai.recommendations,
    ] {
        if !section.is_empty() {
            out.push_str("\n\n");
            out.push_str(section);
        }
    }
    out
}
