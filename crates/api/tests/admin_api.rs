//! HTTP-level integration tests for the admin surface: admin login, RBAC
//! enforcement, taxonomy CRUD, and triage.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::SqlitePool;

use relato_db::repositories::TypeRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a user through the API and return the issued token.
async fn register_user(app: Router, name: &str, email: &str) -> String {
    let body = serde_json::json!({ "name": name, "email": email, "password": "segredo123" });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["token"].as_str().expect("token must be a string").to_string()
}

/// Flip the admin flag on an existing account.
async fn promote_to_admin(pool: &SqlitePool, email: &str) {
    sqlx::query("UPDATE users SET is_admin = 1 WHERE email = ?")
        .bind(email)
        .execute(pool)
        .await
        .expect("promotion should succeed");
}

/// Register + promote + log in through `/admin/login`, returning an admin
/// token.
async fn create_admin(pool: &SqlitePool, email: &str) -> String {
    register_user(common::build_test_app(pool.clone()), "Root", email).await;
    promote_to_admin(pool, email).await;

    let body = serde_json::json!({ "email": email, "password": "segredo123" });
    let response = post_json(common::build_test_app(pool.clone()), "/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], true);
    json["token"].as_str().expect("token must be a string").to_string()
}

/// Seed one report type and return its id.
async fn seed_type(pool: &SqlitePool, name: &str) -> i64 {
    TypeRepo::create(pool, name)
        .await
        .expect("type creation should succeed")
        .id
}

/// Submit a report through the API.
async fn submit_report(app: Router, token: &str, title: &str, type_id: i64) {
    let body = serde_json::json!({
        "title": title,
        "type": type_id,
        "description": "Poste apagado há uma semana.",
        "location": "Rua das Flores, 123",
    });
    let response = post_json_auth(app, "/add-report", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Admin login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_login_rejects_non_admin_with_403(pool: SqlitePool) {
    register_user(common::build_test_app(pool.clone()), "Ana", "ana@example.com").await;

    let body = serde_json::json!({ "email": "ana@example.com", "password": "segredo123" });
    let response = post_json(common::build_test_app(pool), "/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Você não é um administrador. Por favor, logue como usuário."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_login_succeeds_for_admin(pool: SqlitePool) {
    create_admin(&pool, "root@example.com").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_login_wrong_password_returns_401(pool: SqlitePool) {
    register_user(common::build_test_app(pool.clone()), "Root", "root@example.com").await;
    promote_to_admin(&pool, "root@example.com").await;

    let body = serde_json::json!({ "email": "root@example.com", "password": "errada" });
    let response = post_json(common::build_test_app(pool), "/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Email ou password inválidos. Por favor tente novamente."
    );
}

// ---------------------------------------------------------------------------
// RBAC enforcement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_plain_users(pool: SqlitePool) {
    let token = register_user(common::build_test_app(pool.clone()), "Ana", "ana@example.com").await;

    let response = get_auth(common::build_test_app(pool), "/admin/statuses", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Acesso negado.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_missing_token(pool: SqlitePool) {
    let response = common::get(common::build_test_app(pool), "/admin/statuses").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejected_mutation_does_not_mutate(pool: SqlitePool) {
    let user = register_user(common::build_test_app(pool.clone()), "Ana", "ana@example.com").await;
    let admin = create_admin(&pool, "root@example.com").await;

    let body = serde_json::json!({ "name": "Forjado" });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/admin/add-status", body, &user)
            .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Still only the three seeded statuses.
    let json = body_json(get_auth(common::build_test_app(pool), "/admin/statuses", &admin).await)
        .await;
    assert_eq!(json.as_array().expect("array").len(), 3);
}

// ---------------------------------------------------------------------------
// Status taxonomy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn statuses_lists_seeded_rows(pool: SqlitePool) {
    let admin = create_admin(&pool, "root@example.com").await;

    let json = body_json(get_auth(common::build_test_app(pool), "/admin/statuses", &admin).await)
        .await;
    let statuses = json.as_array().expect("array");
    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses[0]["name"], "Enviado");
    assert_eq!(statuses[1]["name"], "Em análise");
    assert_eq!(statuses[2]["name"], "Resolvido");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_crud_roundtrip(pool: SqlitePool) {
    let admin = create_admin(&pool, "root@example.com").await;

    let body = serde_json::json!({ "name": "Arquivado" });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/admin/add-status", body, &admin)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Status criado com sucesso.");

    let body = serde_json::json!({ "id": 4, "name": "Encerrado" });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/admin/update-status", body, &admin)
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Status atualizado com sucesso.");

    let body = serde_json::json!({ "id": 4 });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/admin/delete-status", body, &admin)
            .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting the same id again finds nothing.
    let body = serde_json::json!({ "id": 4 });
    let response =
        post_json_auth(common::build_test_app(pool), "/admin/delete-status", body, &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_status_returns_404(pool: SqlitePool) {
    let admin = create_admin(&pool, "root@example.com").await;

    let body = serde_json::json!({ "id": 999, "name": "Fantasma" });
    let response =
        post_json_auth(common::build_test_app(pool), "/admin/update-status", body, &admin).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Status não encontrado.");
}

// ---------------------------------------------------------------------------
// Type taxonomy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn type_crud_roundtrip(pool: SqlitePool) {
    let admin = create_admin(&pool, "root@example.com").await;

    let body = serde_json::json!({ "name": "Iluminação" });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/admin/add-type", body, &admin)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Tipo criado com sucesso.");

    let body = serde_json::json!({ "id": 1, "name": "Iluminação pública" });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/admin/update-type", body, &admin)
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Tipo atualizado com sucesso.");

    let body = serde_json::json!({ "id": 1 });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/admin/delete-type", body, &admin)
            .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "id": 1, "name": "Fantasma" });
    let response =
        post_json_auth(common::build_test_app(pool), "/admin/update-type", body, &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Tipo não encontrado.");
}

// ---------------------------------------------------------------------------
// Cross-user listing and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_reports_empty_returns_message(pool: SqlitePool) {
    let admin = create_admin(&pool, "root@example.com").await;

    let json = body_json(get_auth(common::build_test_app(pool), "/admin/reports", &admin).await)
        .await;
    assert_eq!(json["message"], "Nenhum reporte encontrado.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_reports_joins_owner_and_filters(pool: SqlitePool) {
    let lighting = seed_type(&pool, "Iluminação").await;
    let pothole = seed_type(&pool, "Buraco na via").await;

    let admin = create_admin(&pool, "root@example.com").await;
    let ana = register_user(common::build_test_app(pool.clone()), "Ana", "ana@example.com").await;
    let rui = register_user(common::build_test_app(pool.clone()), "Rui", "rui@example.com").await;

    submit_report(common::build_test_app(pool.clone()), &ana, "Poste apagado", lighting).await;
    submit_report(common::build_test_app(pool.clone()), &rui, "Cratera na rua", pothole).await;

    // Unfiltered: everything, joined with owner identity but no password.
    let json = body_json(
        get_auth(common::build_test_app(pool.clone()), "/admin/reports", &admin).await,
    )
    .await;
    let reports = json.as_array().expect("array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["user_name"], "Ana");
    assert_eq!(reports[0]["user_email"], "ana@example.com");
    assert!(reports[0].get("password").is_none());

    // Filter by type.
    let json = body_json(
        get_auth(
            common::build_test_app(pool.clone()),
            &format!("/admin/reports?type={pothole}"),
            &admin,
        )
        .await,
    )
    .await;
    let reports = json.as_array().expect("array");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["title"], "Cratera na rua");

    // Filter by owner. Ana registered after the admin, so her id is 2.
    let json = body_json(
        get_auth(common::build_test_app(pool.clone()), "/admin/reports?user_id=2", &admin).await,
    )
    .await;
    let reports = json.as_array().expect("array");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["user_name"], "Ana");

    // Conjunction with no match answers the empty-set message.
    let json = body_json(
        get_auth(
            common::build_test_app(pool),
            &format!("/admin/reports?type={lighting}&user_id=3"),
            &admin,
        )
        .await,
    )
    .await;
    assert_eq!(json["message"], "Nenhum reporte encontrado.");
}

// ---------------------------------------------------------------------------
// Triage
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn change_status_moves_report(pool: SqlitePool) {
    let type_id = seed_type(&pool, "Iluminação").await;
    let admin = create_admin(&pool, "root@example.com").await;
    let ana = register_user(common::build_test_app(pool.clone()), "Ana", "ana@example.com").await;
    submit_report(common::build_test_app(pool.clone()), &ana, "Poste apagado", type_id).await;

    // Move to "Em análise" (seeded id 2).
    let body = serde_json::json!({ "report_id": 1, "status_id": 2 });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/admin/change-status", body, &admin)
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Status do reporte alterado com sucesso.");

    // The owner sees the new status.
    let json = body_json(get_auth(common::build_test_app(pool), "/reports", &ana).await).await;
    assert_eq!(json[0]["status_name"], "Em análise");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn change_status_missing_params_returns_400(pool: SqlitePool) {
    let admin = create_admin(&pool, "root@example.com").await;

    let body = serde_json::json!({ "report_id": 1 });
    let response =
        post_json_auth(common::build_test_app(pool), "/admin/change-status", body, &admin).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Parâmetros inválidos.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn change_status_of_missing_report_returns_404(pool: SqlitePool) {
    let admin = create_admin(&pool, "root@example.com").await;

    let body = serde_json::json!({ "report_id": 999, "status_id": 2 });
    let response =
        post_json_auth(common::build_test_app(pool), "/admin/change-status", body, &admin).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Report não encontrado.");
}
