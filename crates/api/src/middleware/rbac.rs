//! Admin-gating extractor.
//!
//! Wraps [`AuthUser`] and rejects any claim without the admin flag, so
//! every privileged endpoint enforces the same capability predicate in one
//! place instead of re-checking the flag inline.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use relato_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an admin claim. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(AppError::Core(CoreError::Forbidden("Acesso negado.".into())));
        }
        Ok(RequireAdmin(user))
    }
}
