use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use simplr_core::catalog;
use simplr_core::models::entry::RepositoryEntry;
use simplr_core::models::metadata::ReportMetadata;
use simplr_core::models::session::{BrowseSession, Opened};
use simplr_gemini::prompt;
use simplr_github::contents::{fetch_raw, list_contents};

use crate::error::ApiError;
use crate::routes::explain::ExplainResponse;
use crate::state::{AppState, SessionSlot};

const LISTING_FAILED: &str = "Failed to fetch contents";

/// What the browser renders: where the user is, what is there, and what has
/// been picked so far.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub repo: String,
    pub current_path: String,
    pub entries: Vec<RepositoryEntry>,
    pub selection: Vec<RepositoryEntry>,
    pub metadata: ReportMetadata,
    pub generating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSession {
    pub repo: String,
}

#[derive(Debug, Serialize)]
pub struct OpenResponse {
    pub opened: Opened,
    pub session: SessionView,
}

#[derive(Deserialize)]
pub struct FileQuery {
    pub path: String,
}

#[derive(Deserialize)]
pub struct ExplainFile {
    pub path: String,
}

#[derive(Deserialize)]
pub struct FollowUp {
    pub explanation: String,
    pub question: String,
}

async fn load_slot(state: &AppState, id: Uuid) -> Result<SessionSlot, ApiError> {
    state
        .sessions
        .with(id, |slot| slot.clone())
        .await
        .ok_or_else(ApiError::session_not_found)
}

/// Build the view from a copy of the session. The listing is fetched without
/// holding the store lock.
async fn session_view(state: &AppState, id: Uuid) -> Result<SessionView, ApiError> {
    let slot = load_slot(state, id).await?;
    let session = slot.session;

    let (entries, error) =
        match list_contents(&state.github, &session.repo, &session.current_path).await {
            Ok(entries) => (entries, None),
            Err(e) => {
                warn!(repo = %session.repo, path = %session.current_path, error = %e, "listing failed");
                (Vec::new(), Some(LISTING_FAILED.to_string()))
            }
        };

    Ok(SessionView {
        id,
        selection: session.selection.snapshot(),
        repo: session.repo,
        current_path: session.current_path,
        entries,
        metadata: session.metadata,
        generating: slot.generating,
        error,
    })
}

/// Start browsing one of the catalogued repositories at its root.
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSession>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let lab = catalog::by_repo(&req.repo)?;
    let id = state.sessions.insert(BrowseSession::new(lab.repo)).await;
    info!(%id, repo = lab.repo, lab = lab.title, "session created");

    let view = session_view(&state, id).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(session_view(&state, id).await?))
}

/// A click on a listing entry: files toggle, directories are entered.
pub async fn open_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(entry): Json<RepositoryEntry>,
) -> Result<Json<OpenResponse>, ApiError> {
    let opened = state
        .sessions
        .with(id, |slot| slot.session.open(&entry))
        .await
        .ok_or_else(ApiError::session_not_found)?;

    let session = session_view(&state, id).await?;
    Ok(Json(OpenResponse { opened, session }))
}

/// Go up one directory. At the root this changes nothing.
pub async fn go_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .sessions
        .with(id, |slot| slot.session.back())
        .await
        .ok_or_else(ApiError::session_not_found)?;

    Ok(Json(session_view(&state, id).await?))
}

pub async fn update_metadata(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(metadata): Json<ReportMetadata>,
) -> Result<Json<ReportMetadata>, ApiError> {
    state
        .sessions
        .with(id, |slot| slot.session.metadata = metadata.clone())
        .await
        .ok_or_else(ApiError::session_not_found)?;

    Ok(Json(metadata))
}

/// Raw text of one file in the session's repository.
pub async fn view_file(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<FileQuery>,
) -> Result<String, ApiError> {
    let slot = load_slot(&state, id).await?;
    Ok(fetch_raw(&state.github, &slot.session.repo, &query.path).await?)
}

/// Fetch a file and ask for a step-by-step algorithm of it.
pub async fn explain_file(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ExplainFile>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let slot = load_slot(&state, id).await?;
    let code = fetch_raw(&state.github, &slot.session.repo, &req.path).await?;

    let explanation = state
        .gemini
        .generate(&prompt::explain_algorithm(&code))
        .await?;
    Ok(Json(ExplainResponse { explanation }))
}

pub async fn follow_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FollowUp>,
) -> Result<Json<ExplainResponse>, ApiError> {
    load_slot(&state, id).await?;

    let explanation = state
        .gemini
        .generate(&prompt::follow_up(&req.explanation, &req.question))
        .await?;
    Ok(Json(ExplainResponse { explanation }))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(id).await {
        info!(%id, "session closed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::session_not_found())
    }
}
