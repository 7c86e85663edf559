//! Handlers for registration, login, and self-service account management.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use relato_core::error::CoreError;
use relato_db::models::user::{CreateUser, UpdateUser, UserResponse};
use relato_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /update-user-info`. Unset fields are preserved.
#[derive(Debug, Deserialize)]
pub struct UpdateUserInfoRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "currentPassword")]
    pub current_password: Option<String>,
}

/// Request body for `POST /delete-user`.
#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: Option<String>,
}

/// Successful registration response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: bool,
    pub token: String,
}

/// Response body for `GET /profile`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create an account and return a token for the new identity.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(name), Some(email), Some(password)) = (
        non_blank(&input.name),
        non_blank(&input.email),
        non_blank(&input.password),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, prencha todos os campos.".into(),
        )));
    };

    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "Email já cadastrado.".into(),
        )));
    }

    let hashed = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password: hashed,
        },
    )
    .await?;

    let token = generate_token(user.id, user.is_admin, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Usuário criado com sucesso!".to_string(),
            token,
        }),
    ))
}

/// POST /login
///
/// Authenticate with email + password. Returns a token valid until its
/// embedded expiry.
pub async fn login(
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
            "Email ou password inválido. Por favor tente novamente.".into(),
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

    let token = generate_token(user.id, user.is_admin, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoginResponse {
        status: true,
        token,
    }))
}

/// POST /update-user-info
///
/// Overwrite the provided profile fields after re-checking the current
/// password. Unset (or blank) fields keep their stored values.
pub async fn update_user_info(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateUserInfoRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Usuário não encontrado.".into())))?;

    let current = input.current_password.as_deref().unwrap_or_default();
    let current_valid = verify_password(current, &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "password de verificação incorreta.".into(),
        )));
    }

    let new_password = match non_blank(&input.password) {
        Some(p) => Some(
            hash_password(p)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
        ),
        None => None,
    };

    let update = UpdateUser {
        name: non_blank(&input.name).map(str::to_string),
        email: non_blank(&input.email).map(str::to_string),
        password: new_password,
    };

    UserRepo::update_info(&state.pool, auth.user_id, &update)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Usuário não encontrado.".into())))?;

    tracing::info!(user_id = auth.user_id, "User info updated");

    Ok(Json(MessageResponse::new(
        "Informações do usuário atualizadas com sucesso.",
    )))
}

/// POST /delete-user
///
/// Delete the authenticated account after re-checking the current
/// password. Owned reports are removed by the storage cascade.
pub async fn delete_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<DeleteUserRequest>,
) -> AppResult<StatusCode> {
    let Some(current) = non_blank(&input.current_password) else {
        return Err(AppError::Core(CoreError::Validation(
            "Por favor, preencha a password de verificação.".into(),
        )));
    };

    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Usuário não encontrado.".into())))?;

    let current_valid = verify_password(current, &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "password de verificação incorreta.".into(),
        )));
    }

    UserRepo::delete(&state.pool, auth.user_id).await?;

    tracing::info!(user_id = auth.user_id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /profile
///
/// Return the authenticated user's record, password redacted. The token
/// may outlive the account, so a vanished subject is a 404.
pub async fn my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Usuário não encontrado.".into())))?;

    Ok(Json(ProfileResponse { user: user.into() }))
}
