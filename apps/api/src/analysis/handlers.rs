//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::export::{render_text_report, EXPORT_FILE_NAME};
use crate::analysis::report::{analyze, AnalysisReport};
use crate::errors::AppError;
use crate::extraction::FileKind;
use crate::models::job::{ReadyReview, ReviewRequest};
use crate::state::AppState;

const NO_TEXT_EXTRACTED: &str = "No text could be extracted from the uploaded file";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadAnalysisResponse {
    pub report: AnalysisReport,
    pub extraction_notice: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Analyzes pasted resume text against a target role.
pub async fn handle_analyze(
    Json(request): Json<ReviewRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let ready = request.ready()?;
    Ok(Json(run_analysis(&ready)))
}

/// POST /api/v1/analyze/export
///
/// Same input as `/analyze`; returns the plain-text report as a download.
pub async fn handle_export(
    Json(request): Json<ReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let ready = request.ready()?;
    let text = render_text_report(&run_analysis(&ready));

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        text,
    ))
}

/// POST /api/v1/analyze/upload
///
/// Multipart fields: `resume` (PDF or TXT file), `job_role`, optional `job_description`.
/// An upload that yields no text is a 422, carrying the extractor's notice when it has one.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAnalysisResponse>, AppError> {
    let mut file: Option<(Bytes, Option<FileKind>)> = None;
    let mut job_role = String::new();
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let kind = field.file_name().and_then(FileKind::from_file_name);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume file: {e}")))?;
                file = Some((data, kind));
            }
            Some("job_role") => job_role = read_text_field(field).await?,
            Some("job_description") => job_description = Some(read_text_field(field).await?),
            _ => {}
        }
    }

    let (data, kind) =
        file.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let extraction = state.extractor.extract(&data, kind).await;

    if extraction.text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            extraction
                .notice
                .unwrap_or_else(|| NO_TEXT_EXTRACTED.to_string()),
        ));
    }

    let ready = ReviewRequest {
        resume_text: extraction.text,
        job_role,
        job_description,
    }
    .ready()?;

    Ok(Json(UploadAnalysisResponse {
        report: run_analysis(&ready),
        extraction_notice: extraction.notice,
    }))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}

fn run_analysis(ready: &ReadyReview) -> AnalysisReport {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        role = %ready.job.role,
        has_description = ready.job.has_description(),
        "Analyzing resume"
    );
    let report = analyze(&ready.resume_text, &ready.job.role);
    info!(%request_id, overall = report.scores.overall, "Analysis complete");
    report
}
