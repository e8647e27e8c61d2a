//! # Route Handlers
//!
//! This module organizes the Axum route handlers for the `relaxgo-server`.
//! `form` serves the browser page, `api` the JSON and download endpoints,
//! and `general` the small informational routes.

pub mod api;
pub mod form;
pub mod general;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use api::*;
pub use form::*;
pub use general::*;

// Shared items used by multiple handler modules.
use super::{
    errors::AppError,
    pipeline::{SubmittedForm, UploadedDocument},
    state::AppState,
    types::{ApiResponse, DebugParams},
};
use axum::{extract::Query, Json};
use axum_extra::extract::Multipart;
use serde_json::Value;
use tracing::{info, warn};

/// A shared helper function to wrap a successful result in the standard `ApiResponse`
/// format, optionally including debug information if requested.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}

/// Reads the preference form out of a multipart body.
///
/// Only reads; presence and validity are checked by the pipeline.
pub(crate) async fn read_submitted_form(
    mut multipart: Multipart,
) -> Result<SubmittedForm, AppError> {
    let mut form = SubmittedForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "tour_package" => {
                let file_name = field.file_name().unwrap_or("tour_package.pdf").to_string();
                let content = field.bytes().await?.to_vec();
                info!(file_name = %file_name, bytes = content.len(), "Tour package received.");
                form.tour_package = Some(UploadedDocument { file_name, content });
            }
            "destination" => form.destination = field.text().await?,
            "travel_dates" => form.travel_dates = field.text().await?,
            "budget" => form.budget = Some(field.text().await?),
            "activities" => form.activities.push(field.text().await?),
            "allergies" => form.allergies = field.text().await?,
            "notes" => form.notes = field.text().await?,
            _ => warn!("Ignoring unknown multipart field: {}", name),
        }
    }

    Ok(form)
}
