//! # General Route Handlers
//!
//! The empty form page, the health check and the activity catalog.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use relaxgo::Activity;

/// The handler for the root (`/`) endpoint: the form in its `AwaitingInput` state.
pub async fn root(State(app_state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = app_state
        .views
        .render_form()
        .map_err(anyhow::Error::from)?;
    Ok(Html(page))
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Lists the activity catalog in display order.
pub async fn activities_handler(
    debug_params: Query<DebugParams>,
) -> Json<ApiResponse<Vec<Activity>>> {
    wrap_response(Activity::ALL.to_vec(), debug_params, None)
}
