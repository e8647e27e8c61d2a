use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
///
/// The routes accepting a form submission share the configured upload limit.
pub fn create_router(app_state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(app_state.config.upload_limit_bytes);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/generate",
            post(handlers::generate_page_handler).layer(upload_limit.clone()),
        )
        .route(
            "/api/recommendations",
            post(handlers::recommendations_handler).layer(upload_limit.clone()),
        )
        .route(
            "/api/report",
            post(handlers::report_handler).layer(upload_limit),
        )
        .route("/api/activities", get(handlers::activities_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
