use crate::pipeline::FormError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::multipart::MultipartError;
use relaxgo::RecommendError;
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// A submission that ended in the form's error state.
    Form(FormError),
    /// A multipart body the server could not read.
    Multipart(MultipartError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `FormError` to `AppError`.
impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::Form(err)
    }
}

/// Conversion from `MultipartError` to `AppError`.
impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Multipart(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl FormError {
    /// The HTTP status a submission ending in this error is answered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            FormError::MissingInput { .. }
            | FormError::InvalidInput(_)
            | FormError::UnparseableDocument(_)
            | FormError::UnreadableDocument => StatusCode::UNPROCESSABLE_ENTITY,
            FormError::ServiceCall(RecommendError::MissingProvider)
            | FormError::ServiceCall(RecommendError::ReqwestClientBuild(_))
            | FormError::Report(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FormError::ServiceCall(_) | FormError::EmptyResponse => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::Form(err) => {
                let status_code = err.status_code();
                // Log the original error for debugging purposes
                if status_code.is_server_error() {
                    error!("FormError: {:?}", err);
                } else {
                    warn!("FormError: {:?}", err);
                }
                let missing = err.missing_fields();
                let body = if missing.is_empty() {
                    json!({ "error": err.to_string() })
                } else {
                    json!({ "error": err.to_string(), "missing": missing })
                };
                (status_code, body)
            }
            AppError::Multipart(err) => {
                warn!("Multipart error: {:?}", err);
                (err.status(), json!({ "error": err.body_text() }))
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred." }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
