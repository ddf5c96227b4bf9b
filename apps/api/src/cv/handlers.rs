//! Axum route handlers for the CV API.

use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        rejection::JsonRejection,
        State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::cv::docx::{DOCX_CONTENT_TYPE, GENERATED_FILENAME, TAILORED_FILENAME};
use crate::cv::generator::{generate_cv, tailor_cv, CvError};
use crate::errors::AppError;
use crate::models::cv::{CvInput, TailorInput};
use crate::state::AppState;

/// POST /api/generate-cv
///
/// Builds a CV from the four form fields and returns it as `generated_cv.docx`.
/// A body that is not valid JSON fails like any other downstream error.
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    body: Result<Json<CvInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = body.map_err(|e| AppError::Generate(CvError::Body(e.to_string())))?;

    info!(
        personal_details = input.personal_details.len(),
        work_experience = input.work_experience.len(),
        education = input.education.len(),
        skills = input.skills.len(),
        "Generating CV"
    );

    let bytes = generate_cv(state.generator.as_ref(), &input)
        .await
        .map_err(AppError::Generate)?;

    Ok(docx_response(bytes, GENERATED_FILENAME))
}

/// POST /api/tailor-cv
///
/// Multipart fields: `cvFile` (docx blob) and `jobDescription` (text).
/// Returns the tailored CV as `tailored_cv.docx`.
pub async fn handle_tailor_cv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::Tailor(CvError::Body(e.to_string())))?;
    let input = read_tailor_form(&mut multipart).await?;

    info!(
        cv_file = input.cv_file.len(),
        job_description = input.job_description.len(),
        "Tailoring CV"
    );

    let bytes = tailor_cv(state.generator.as_ref(), state.extractor.clone(), input)
        .await
        .map_err(AppError::Tailor)?;

    Ok(docx_response(bytes, TAILORED_FILENAME))
}

/// Collects `cvFile` and `jobDescription`, ignoring unknown fields.
/// An empty job description counts as missing.
async fn read_tailor_form(multipart: &mut Multipart) -> Result<TailorInput, AppError> {
    let mut cv_file = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("cvFile") => cv_file = Some(field.bytes().await.map_err(multipart_error)?),
            Some("jobDescription") => {
                job_description = Some(field.text().await.map_err(multipart_error)?)
            }
            _ => {}
        }
    }

    match (cv_file, job_description) {
        (Some(cv_file), Some(job_description)) if !job_description.is_empty() => {
            Ok(TailorInput {
                cv_file,
                job_description,
            })
        }
        _ => Err(AppError::MissingTailorInput),
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Tailor(CvError::Body(e.to_string()))
}

fn docx_response(bytes: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
