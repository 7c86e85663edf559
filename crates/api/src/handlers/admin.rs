//! Handlers for the admin surface: admin login, taxonomy CRUD, the
//! cross-user report listing, and triage status changes.
//!
//! Every route except `/admin/login` takes the [`RequireAdmin`] guard, so
//! the capability check lives in the extractor rather than in each body.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relato_core::error::CoreError;
use relato_core::types::DbId;
use relato_db::models::report::ReportFilter;
use relato_db::repositories::{ReportRepo, StatusRepo, TypeRepo, UserRepo};
use serde::Deserialize;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::handlers::users::{LoginRequest, LoginResponse};
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body for `POST /admin/add-status` and `/admin/add-type`.
#[derive(Debug, Deserialize)]
pub struct CreateNameRequest {
    pub name: Option<String>,
}

/// Body for `POST /admin/update-status` and `/admin/update-type`.
#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

/// Body for `POST /admin/delete-status` and `/admin/delete-type`.
#[derive(Debug, Deserialize)]
pub struct DeleteByIdRequest {
    pub id: Option<DbId>,
}

/// Query parameters for `GET /admin/reports`. The wire names `status`
/// and `type` carry ids, matching the filter columns.
#[derive(Debug, Default, Deserialize)]
pub struct ReportFilterQuery {
    pub status: Option<DbId>,
    #[serde(rename = "type")]
    pub type_id: Option<DbId>,
    pub user_id: Option<DbId>,
}

/// Body for `POST /admin/change-status`.
#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    pub report_id: Option<DbId>,
    pub status_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// POST /admin/login
///
/// Same credential check as the user login, then rejects non-admin
/// accounts with 403 instead of minting a token without the flag.
pub async fn admin_login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (non_blank(&input.email), non_blank(&input.password))
    else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Email ou password inválidos. Por favor tente novamente.".into(),
        ))
    };

    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(password, &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    if !user.is_admin {
        return Err(AppError::Core(CoreError::Forbidden(
            "Você não é um administrador. Por favor, logue como usuário.".into(),
        )));
    }

    let token = generate_token(user.id, user.is_admin, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "Admin logged in");

    Ok(Json(LoginResponse {
        status: true,
        token,
    }))
}

// ---------------------------------------------------------------------------
// Status taxonomy
// ---------------------------------------------------------------------------

/// GET /admin/statuses
pub async fn list_statuses(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Response> {
    let statuses = StatusRepo::list(&state.pool).await?;
    Ok(Json(statuses).into_response())
}

/// POST /admin/add-status
pub async fn add_status(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateNameRequest>,
) -> AppResult<impl IntoResponse> {
    let Some(name) = non_blank(&input.name) else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    let status = StatusRepo::create(&state.pool, name).await?;
    tracing::info!(status_id = status.id, "Status created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Status criado com sucesso.")),
    ))
}

/// POST /admin/update-status
pub async fn update_status(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateNameRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (Some(id), Some(name)) = (input.id, non_blank(&input.name)) else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    StatusRepo::update(&state.pool, id, name)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Status não encontrado.".into())))?;

    Ok(Json(MessageResponse::new("Status atualizado com sucesso.")))
}

/// POST /admin/delete-status
pub async fn delete_status(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<DeleteByIdRequest>,
) -> AppResult<StatusCode> {
    let Some(id) = input.id else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    let deleted = StatusRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound(
            "Status não encontrado.".into(),
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Type taxonomy
// ---------------------------------------------------------------------------

/// POST /admin/add-type
pub async fn add_type(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateNameRequest>,
) -> AppResult<impl IntoResponse> {
    let Some(name) = non_blank(&input.name) else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    let report_type = TypeRepo::create(&state.pool, name).await?;
    tracing::info!(type_id = report_type.id, "Type created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Tipo criado com sucesso.")),
    ))
}

/// POST /admin/update-type
pub async fn update_type(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateNameRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (Some(id), Some(name)) = (input.id, non_blank(&input.name)) else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    TypeRepo::update(&state.pool, id, name)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Tipo não encontrado.".into())))?;

    Ok(Json(MessageResponse::new("Tipo atualizado com sucesso.")))
}

/// POST /admin/delete-type
pub async fn delete_type(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<DeleteByIdRequest>,
) -> AppResult<StatusCode> {
    let Some(id) = input.id else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha todos os campos.".into(),
        )));
    };

    let deleted = TypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound(
            "Tipo não encontrado.".into(),
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Triage
// ---------------------------------------------------------------------------

/// GET /admin/reports
///
/// Cross-user listing with optional equality filters. Absent filters
/// match everything; combined filters are a conjunction.
pub async fn list_reports(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ReportFilterQuery>,
) -> AppResult<Response> {
    let filter = ReportFilter {
        status_id: query.status,
        type_id: query.type_id,
        id_user: query.user_id,
    };

    let reports = ReportRepo::list_filtered(&state.pool, &filter).await?;
    if reports.is_empty() {
        return Ok(Json(MessageResponse::new("Nenhum reporte encontrado.")).into_response());
    }
    Ok(Json(reports).into_response())
}

/// POST /admin/change-status
///
/// Move a report through the triage pipeline without touching any other
/// field.
pub async fn change_report_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ChangeStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (Some(report_id), Some(status_id)) = (input.report_id, input.status_id) else {
        return Err(AppError::Core(CoreError::Validation(
            "Parâmetros inválidos.".into(),
        )));
    };

    let changed = ReportRepo::set_status(&state.pool, report_id, status_id).await?;
    if !changed {
        return Err(AppError::Core(CoreError::NotFound(
            "Report não encontrado.".into(),
        )));
    }

    tracing::info!(
        report_id,
        status_id,
        admin_id = admin.user_id,
        "Report status changed"
    );

    Ok(Json(MessageResponse::new(
        "Status do reporte alterado com sucesso.",
    )))
}
