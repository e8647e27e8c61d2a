//! # API Route Handlers
//!
//! The same generation pipeline as the form, for non-browser clients.

use super::{read_submitted_form, wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::{pipeline::run_generation, types::RecommendationResponse};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::Multipart;
use relaxgo::serialize_preferences;
use serde_json::json;
use tracing::info;

/// The handler for `POST /api/recommendations`.
///
/// Returns the structured recommendation together with the report inlined as
/// base64. With `?debug=true` the serialized preferences sent to the service
/// are included.
pub async fn recommendations_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<RecommendationResponse>>, AppError> {
    let form = read_submitted_form(multipart).await?;
    let success = run_generation(&app_state.recommender, form).await?;

    let debug_info = Some(json!({
        "source_file_name": success.source_file_name,
        "preferences": serialize_preferences(&success.preferences),
        "table_id": app_state.recommender.table_id(),
    }));

    Ok(wrap_response(success.into(), debug_params, debug_info))
}

/// The handler for `POST /api/report`: the report document itself.
pub async fn report_handler(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = read_submitted_form(multipart).await?;
    let success = run_generation(&app_state.recommender, form).await?;
    let report = success.report;

    info!(file_name = %report.file_name, "Serving report download.");
    let disposition = format!("attachment; filename=\"{}\"", report.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, report.mime_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.content,
    )
        .into_response())
}
