//! Handlers for citizen-facing report operations.
//!
//! Creation and the owner's full-row update both resolve the initial
//! status by name at request time, so a report edited by its owner goes
//! back to the start of the triage pipeline.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relato_core::error::CoreError;
use relato_core::status::INITIAL_STATUS_NAME;
use relato_core::types::DbId;
use relato_db::models::report::{CreateReport, UpdateReport};
use relato_db::models::report_type::ReportType;
use relato_db::repositories::{ReportRepo, StatusRepo, TypeRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /add-report` and `POST /update-report`. The
/// wire field `type` carries the type id.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub report_id: Option<DbId>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub type_id: Option<DbId>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
}

/// Response body for `GET /type-list` when any type exists.
#[derive(Debug, Serialize)]
pub struct TypeListResponse {
    #[serde(rename = "type")]
    pub types: Vec<ReportType>,
}

/// GET /type-list
///
/// Public taxonomy listing for the submission form. An empty taxonomy
/// answers with a message body instead of an empty array.
pub async fn type_list(State(state): State<AppState>) -> AppResult<Response> {
    let types = TypeRepo::list(&state.pool).await?;
    if types.is_empty() {
        return Ok(Json(MessageResponse::new("Nenhum type cadastrado.")).into_response());
    }
    Ok(Json(TypeListResponse { types }).into_response())
}

/// GET /reports
///
/// List the authenticated user's own reports with type and status names.
pub async fn my_reports(auth: AuthUser, State(state): State<AppState>) -> AppResult<Response> {
    let reports = ReportRepo::list_by_user(&state.pool, auth.user_id).await?;
    if reports.is_empty() {
        return Ok(Json(MessageResponse::new("Nenhum report encontrado.")).into_response());
    }
    Ok(Json(reports).into_response())
}

/// GET /report/{id}
///
/// Public single-report view, joined with its type name.
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let report = ReportRepo::find_by_id_with_type(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Report não encontrado.".into())))?;
    Ok(Json(report).into_response())
}

/// POST /add-report
///
/// Create a report owned by the authenticated user, starting in the
/// initial status.
pub async fn add_report(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ReportRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(title), Some(type_id), Some(description), Some(location)) = (
        non_blank(&input.title),
        input.type_id,
        non_blank(&input.description),
        non_blank(&input.location),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    let status_id = initial_status_id(&state).await?;

    let report = ReportRepo::create(
        &state.pool,
        &CreateReport {
            title: title.to_string(),
            type_id,
            description: description.to_string(),
            image: non_blank(&input.image).map(str::to_string),
            location: location.to_string(),
            status_id,
            id_user: auth.user_id,
        },
    )
    .await?;

    tracing::info!(report_id = report.id, user_id = auth.user_id, "Report created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Reporte criado com sucesso.")),
    ))
}

/// POST /update-report
///
/// Owner's full-row overwrite. Resets the status to the initial one and
/// answers 404 when the report is absent or owned by someone else.
pub async fn update_report(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ReportRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (Some(id), Some(title), Some(type_id), Some(description), Some(location)) = (
        input.report_id,
        non_blank(&input.title),
        input.type_id,
        non_blank(&input.description),
        non_blank(&input.location),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    let status_id = initial_status_id(&state).await?;

    let updated = ReportRepo::update_owned(
        &state.pool,
        id,
        auth.user_id,
        &UpdateReport {
            title: title.to_string(),
            type_id,
            description: description.to_string(),
            image: non_blank(&input.image).map(str::to_string),
            location: location.to_string(),
            status_id,
        },
    )
    .await?;

    if !updated {
        return Err(AppError::Core(CoreError::NotFound(
            "Report não encontrado.".into(),
        )));
    }

    tracing::info!(report_id = id, user_id = auth.user_id, "Report updated");

    Ok(Json(MessageResponse::new("Reporte atualizado com sucesso.")))
}

/// Request body for `POST /delete-report`.
#[derive(Debug, Deserialize)]
pub struct DeleteReportRequest {
    pub report_id: Option<DbId>,
}

/// POST /delete-report
///
/// Owner-scoped deletion. A cross-user id affects zero rows and answers
/// 404, indistinguishable from a missing report.
pub async fn delete_report(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<DeleteReportRequest>,
) -> AppResult<StatusCode> {
    let Some(id) = input.report_id else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    let deleted = ReportRepo::delete_owned(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound(
            "Report não encontrado.".into(),
        )));
    }

    tracing::info!(report_id = id, user_id = auth.user_id, "Report deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Resolve the id of the initial workflow status. A taxonomy missing the
/// initial status makes submissions fail with 404 rather than silently
/// inventing one.
async fn initial_status_id(state: &AppState) -> AppResult<DbId> {
    let status = StatusRepo::find_by_name_contains(&state.pool, INITIAL_STATUS_NAME)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound(format!(
                "Status \"{INITIAL_STATUS_NAME}\" não encontrado."
            )))
        })?;
    Ok(status.id)
}
