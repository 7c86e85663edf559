pub mod health;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::handlers;
use crate::state::AppState;

/// Liveness response payload.
#[derive(Serialize)]
pub struct PingResponse {
    pub pong: bool,
}

/// GET /ping -- trivial liveness probe, no database round-trip.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { pong: true })
}

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ping                      liveness probe (public)
///
/// /register                  create account (public)
/// /login                     user login (public)
/// /update-user-info          update own profile (bearer)
/// /delete-user               delete own account (bearer)
/// /profile                   own profile (bearer)
///
/// /type-list                 report type taxonomy (public)
/// /reports                   own reports (bearer)
/// /report/{id}               single report (public)
/// /add-report                create report (bearer)
/// /update-report             overwrite own report (bearer)
/// /delete-report             delete own report (bearer)
///
/// /admin/login               admin login (public)
/// /admin/statuses            status taxonomy (admin)
/// /admin/add-status          create status (admin)
/// /admin/update-status       rename status (admin)
/// /admin/delete-status       delete status (admin)
/// /admin/add-type            create type (admin)
/// /admin/update-type         rename type (admin)
/// /admin/delete-type         delete type (admin)
/// /admin/reports             filtered cross-user listing (admin)
/// /admin/change-status       triage status change (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        // User account routes.
        .route("/register", post(handlers::users::register))
        .route("/login", post(handlers::users::login))
        .route("/update-user-info", post(handlers::users::update_user_info))
        .route("/delete-user", post(handlers::users::delete_user))
        .route("/profile", get(handlers::users::my_profile))
        // Report routes.
        .route("/type-list", get(handlers::reports::type_list))
        .route("/reports", get(handlers::reports::my_reports))
        .route("/report/{id}", get(handlers::reports::get_report))
        .route("/add-report", post(handlers::reports::add_report))
        .route("/update-report", post(handlers::reports::update_report))
        .route("/delete-report", post(handlers::reports::delete_report))
        // Admin routes.
        .route("/admin/login", post(handlers::admin::admin_login))
        .route("/admin/statuses", get(handlers::admin::list_statuses))
        .route("/admin/add-status", post(handlers::admin::add_status))
        .route("/admin/update-status", post(handlers::admin::update_status))
        .route("/admin/delete-status", post(handlers::admin::delete_status))
        .route("/admin/add-type", post(handlers::admin::add_type))
        .route("/admin/update-type", post(handlers::admin::update_type))
        .route("/admin/delete-type", post(handlers::admin::delete_type))
        .route("/admin/reports", get(handlers::admin::list_reports))
        .route(
            "/admin/change-status",
            post(handlers::admin::change_report_status),
        )
}
