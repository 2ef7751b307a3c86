use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DreamAnalysisRequest {
    pub text: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl DreamAnalysisRequest {
    /// Returns `None` for blank text. A blank email is dropped rather than sent.
    pub fn new(text: &str, language: Language, user_email: Option<&str>) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            language,
            user_email: user_email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadCaptureRequest {
    pub email: String,
    pub language: Language,
}

impl LeadCaptureRequest {
    pub fn new(email: &str, language: Language) -> Option<Self> {
        let email = email.trim();
        if email.is_empty() {
            return None;
        }
        Some(Self {
            email: email.to_string(),
            language,
        })
    }
}

/// Interpretation produced by the analysis service. Summary and recommendations
/// are keyed by language code; codes outside the supported set are kept but unused.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub summary: BTreeMap<String, String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub recommendations: BTreeMap<String, Vec<String>>,
}

impl AnalysisResult {
    pub fn summary_for(&self, language: Language) -> &str {
        self.summary
            .get(language.code())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn recommendations_for(&self, language: Language) -> &[String] {
        self.recommendations
            .get(language.code())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn themes_display(&self) -> String {
        self.themes.join(", ")
    }

    pub fn recommendations_display(&self, language: Language) -> String {
        self.recommendations_for(language).join(" • ")
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeEnvelope {
    analysis: Option<Value>,
}

/// Parses an analyze response body, treating any shape mismatch as a failure.
pub fn parse_analyze_body(body: &[u8]) -> Result<AnalysisResult, ApiError> {
    let envelope: AnalyzeEnvelope =
        serde_json::from_slice(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let analysis = match envelope.analysis {
        Some(Value::Null) | None => {
            return Err(ApiError::Malformed("missing `analysis` field".to_string()))
        }
        Some(value) => value,
    };

    if let Some(error) = analysis.get("error").filter(|v| !v.is_null()) {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(ApiError::ServiceReported(message));
    }

    serde_json::from_value(analysis).map_err(|e| ApiError::Malformed(e.to_string()))
}
