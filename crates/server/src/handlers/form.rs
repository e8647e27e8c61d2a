//! # Form Handler
//!
//! Accepts the browser form submission and answers with the same page, either
//! showing the recommendation or the error that stopped it. The submitted
//! values are always written back into the form.

use super::{read_submitted_form, AppError, AppState};
use crate::pipeline::run_generation;
use axum::{extract::State, http::StatusCode, response::Html};
use axum_extra::extract::Multipart;

/// The handler for `POST /generate`.
pub async fn generate_page_handler(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Html<String>), AppError> {
    let form = read_submitted_form(multipart).await?;
    let sticky = form.sticky_values();

    let outcome = run_generation(&app_state.recommender, form).await;

    let (status, page) = match &outcome {
        Ok(success) => (StatusCode::OK, app_state.views.render_success(&sticky, success)),
        Err(err) => (err.status_code(), app_state.views.render_error(&sticky, err)),
    };
    let page = page.map_err(anyhow::Error::from)?;

    Ok((status, Html(page)))
}
