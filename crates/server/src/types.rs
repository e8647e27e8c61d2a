use crate::pipeline::GenerationSuccess;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use relaxgo::RecommendationResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

/// The generated report, inlined as base64.
#[derive(Serialize, Deserialize, Debug)]
pub struct ReportPayload {
    pub file_name: String,
    pub mime_type: String,
    pub content_base64: String,
}

/// The response body of `/api/recommendations`.
#[derive(Serialize, Deserialize, Debug)]
pub struct RecommendationResponse {
    pub requested_budget: u32,
    pub recommendation: RecommendationResult,
    pub report: ReportPayload,
}

impl From<GenerationSuccess> for RecommendationResponse {
    fn from(success: GenerationSuccess) -> Self {
        let requested_budget = success.requested_budget().value();
        let report = ReportPayload {
            mime_type: success.report.mime_type().to_string(),
            content_base64: STANDARD.encode(&success.report.content),
            file_name: success.report.file_name,
        };
        Self {
            requested_budget,
            recommendation: success.recommendation,
            report,
        }
    }
}
