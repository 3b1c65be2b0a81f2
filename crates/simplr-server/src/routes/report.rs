use axum::extract::{Path, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use tracing::{error, info};
use uuid::Uuid;

use simplr_core::models::session::ReportRequest;
use simplr_export::assemble::gather;
use simplr_export::image::TrailerImage;
use simplr_export::{Report, generate_report};
use simplr_github::contents::RepoFiles;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the PDF for a session's current selection.
///
/// The selection and metadata are copied out first, so clicks made while the
/// report is being built do not change it. Only one generation per session
/// runs at a time. Generation runs on its own task and always clears the
/// in-flight flag, even if the client goes away. On success the selection is
/// cleared; on failure it is kept.
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let request = state
        .sessions
        .with(id, |slot| {
            if slot.generating {
                return Err(ApiError::Conflict(
                    "a report is already being generated".to_string(),
                ));
            }
            if slot.session.selection.is_empty() {
                return Err(ApiError::BadRequest("no files selected".to_string()));
            }
            slot.generating = true;
            Ok(slot.session.snapshot())
        })
        .await
        .ok_or_else(ApiError::session_not_found)??;

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let result = build(&task_state, &request).await;
        if result.is_err() {
            error!(%id, repo = %request.repo, "report generation failed");
        }

        task_state
            .sessions
            .with(id, |slot| {
                slot.generating = false;
                if result.is_ok() {
                    slot.session.finish_report();
                }
            })
            .await;
        result
    });

    let report = match task.await {
        Ok(result) => result?,
        Err(e) => {
            state.sessions.with(id, |slot| slot.generating = false).await;
            return Err(ApiError::Internal(format!("report task failed: {e}")));
        }
    };

    info!(
        %id,
        file_name = %report.file_name,
        pages = report.page_count,
        bytes = report.bytes.len(),
        "report ready"
    );

    let disposition = format!(
        "attachment; filename=\"{}\"",
        report.file_name.replace(['"', '\\'], "_")
    );
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| ApiError::Internal(format!("invalid file name header: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.bytes,
    )
        .into_response())
}

/// Read the trailer image, fetch every selected file in order, then lay out
/// and render off the async workers.
async fn build(state: &AppState, request: &ReportRequest) -> Result<Report, ApiError> {
    let bytes = tokio::fs::read(&state.trailer_image).await.map_err(|e| {
        ApiError::Internal(format!(
            "failed to read trailer image {}: {e}",
            state.trailer_image.display()
        ))
    })?;
    let trailer = TrailerImage::from_bytes(bytes)?;

    let source = RepoFiles {
        client: &state.github,
        repo: &request.repo,
    };
    let files = gather(&source, &request.files).await;

    let style = state.style.clone();
    let metadata = request.metadata.clone();
    let report = tokio::task::spawn_blocking(move || {
        generate_report(&style, &metadata, &files, &trailer)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("report render task failed: {e}")))??;

    Ok(report)
}
