use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cv::generator::CvError;

pub const GENERATE_FAILED: &str = "Failed to generate CV";
pub const TAILOR_FAILED: &str = "Failed to tailor CV";
pub const MISSING_TAILOR_INPUT: &str = "Missing CV file or job description";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Callers only ever see the fixed message of each variant; the underlying
/// `CvError` is logged and dropped.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing CV file or job description")]
    MissingTailorInput,

    #[error("CV generation failed: {0}")]
    Generate(#[source] CvError),

    #[error("CV tailoring failed: {0}")]
    Tailor(#[source] CvError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingTailorInput => (StatusCode::BAD_REQUEST, MISSING_TAILOR_INPUT),
            AppError::Generate(e) => {
                tracing::error!("Error generating CV: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATE_FAILED)
            }
            AppError::Tailor(e) => {
                tracing::error!("Error tailoring CV: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, TAILOR_FAILED)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
