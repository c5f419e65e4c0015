//! Response envelopes for operation results.
//!
//! Every operation result is rendered as one JSON document carrying a
//! `status` key. Successful payload fields sit next to it; failures carry a
//! single descriptive `info` message and never a partial payload. Failures
//! raised while parsing request text also echo the offending `input`.
//!
//! ```json
//! { "status": "success", "count": 2, "distance_threshold": 1000.0, "results": [...] }
//! { "status": "failure", "info": "Missing column: lat" }
//! ```

use serde::Serialize;

use crate::error::AnalysisResult;

/// Status-tagged response document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponseEnvelope<T> {
    Success(T),
    Failure {
        info: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        input: Option<String>,
    },
}

impl<T: Serialize> ResponseEnvelope<T> {
    pub fn from_result(result: AnalysisResult<T>) -> Self {
        match result {
            Ok(payload) => ResponseEnvelope::Success(payload),
            Err(err) => {
                log::warn!("request failed: {}", err);
                ResponseEnvelope::Failure {
                    info: err.to_string(),
                    input: err.echoed_input().map(str::to_string),
                }
            }
        }
    }

    /// Pretty-printed JSON (two-space indent, non-ASCII kept as is).
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                "{{\n  \"status\": \"failure\",\n  \"info\": {}\n}}",
                serde_json::Value::String(format!("Failed to serialize response: {}", e))
            )
        })
    }
}

/// Renders an operation result as a JSON response document.
pub fn render_json<T: Serialize>(result: AnalysisResult<T>) -> String {
    ResponseEnvelope::from_result(result).to_json()
}
