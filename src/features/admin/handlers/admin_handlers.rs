use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::*;
use crate::features::admin::models::AdminSession;
use crate::features::admin::services::{AdminAuthService, AdminService};
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Exchange the admin password for a session token
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Session token issued", body = ApiResponse<AdminTokenDto>),
        (status = 401, description = "Wrong password")
    ),
    tag = "admin"
)]
pub async fn login(
    State(auth): State<Arc<AdminAuthService>>,
    AppJson(dto): AppJson<AdminLoginDto>,
) -> Result<Json<ApiResponse<AdminTokenDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let token = auth.login(&dto.password)?;
    Ok(Json(ApiResponse::success(Some(token), None, None)))
}

/// Latest reports and matches
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Latest reports and matches", body = ApiResponse<AdminDashboardDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn dashboard(
    _session: AdminSession,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<AdminDashboardDto>>> {
    let dashboard = service.dashboard().await?;
    Ok(Json(ApiResponse::success(Some(dashboard), None, None)))
}

/// List all reports (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<AdminReportDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_reports(
    _session: AdminSession,
    State(service): State<Arc<AdminService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminReportDto>>>> {
    let (items, total) = service
        .list_reports(params.offset(), params.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// List all recorded matches (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/matches",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of matches", body = ApiResponse<Vec<AdminMatchDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_matches(
    _session: AdminSession,
    State(service): State<Arc<AdminService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminMatchDto>>>> {
    let (items, total) = service
        .list_matches(params.offset(), params.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Deactivate a report
#[utoipa::path(
    patch,
    path = "/api/admin/reports/{id}/deactivate",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deactivated", body = ApiResponse<AdminReportDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Report not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn deactivate_report(
    session: AdminSession,
    State(service): State<Arc<AdminService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdminReportDto>>> {
    tracing::debug!("Deactivation requested by {}", session.subject);
    let report = service.deactivate_report(id).await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AdminConfig;
    use crate::features::admin::routes::{protected_routes, routes};
    use crate::features::matches::models::MatchRule;
    use crate::features::reports::models::ReportType;
    use crate::shared::constants::MSG_ADMIN_WRONG_PASSWORD;
    use crate::shared::test_helpers::{report_fixture, with_admin_session, InMemoryStore};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn auth() -> Arc<AdminAuthService> {
        Arc::new(AdminAuthService::new(&AdminConfig {
            password: "letmein".to_string(),
            session_secret: "handler-test-secret".to_string(),
            session_ttl: Duration::from_secs(600),
        }))
    }

    fn full_server(store: &Arc<InMemoryStore>) -> TestServer {
        let service = Arc::new(AdminService::new(store.clone()));
        TestServer::new(routes(service, auth())).unwrap()
    }

    fn session_server(store: &Arc<InMemoryStore>) -> TestServer {
        let service = Arc::new(AdminService::new(store.clone()));
        TestServer::new(with_admin_session(protected_routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_login_then_dashboard() {
        let store = InMemoryStore::new();
        let lost = store.seed(report_fixture(ReportType::Lost, Some("KH1"), None));
        let sighting = store.seed(report_fixture(ReportType::Sighting, Some("KH1"), None));
        store.seed_match(&lost, &sighting, MatchRule::Plate);
        let server = full_server(&store);

        let login = server
            .post("/api/admin/login")
            .json(&json!({ "password": "letmein" }))
            .await;
        login.assert_status_ok();
        let body: ApiResponse<AdminTokenDto> = login.json();
        let token = body.data.unwrap().access_token;

        let response = server
            .get("/api/admin/dashboard")
            .authorization_bearer(token)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["reports"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["matches"][0]["lost"]["phone"], lost.phone);
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let store = InMemoryStore::new();

        let response = full_server(&store)
            .post("/api/admin/login")
            .json(&json!({ "password": "nope" }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["message"], MSG_ADMIN_WRONG_PASSWORD);
    }

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let store = InMemoryStore::new();
        let server = full_server(&store);

        server
            .get("/api/admin/reports")
            .expect_failure()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get("/api/admin/matches")
            .authorization_bearer("garbage")
            .expect_failure()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_handlers_reject_requests_without_session() {
        let store = InMemoryStore::new();
        let service = Arc::new(AdminService::new(store.clone()));
        let server = TestServer::new(protected_routes(service)).unwrap();

        server
            .get("/api/admin/dashboard")
            .expect_failure()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_reports_paginates() {
        let store = InMemoryStore::new();
        for plate in ["A1", "A2", "A3"] {
            store.seed(report_fixture(ReportType::Lost, Some(plate), None));
        }

        let response = session_server(&store)
            .get("/api/admin/reports")
            .add_query_param("page", 1)
            .add_query_param("page_size", 2)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["meta"]["total"], 3);
        assert!(body["data"][0]["phone"].is_string());
    }

    #[tokio::test]
    async fn test_far_page_returns_empty_list() {
        let store = InMemoryStore::new();
        store.seed(report_fixture(ReportType::Lost, Some("A1"), None));

        let response = session_server(&store)
            .get("/api/admin/reports")
            .add_query_param("page", i64::MAX)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["data"].as_array().unwrap().is_empty());
        assert_eq!(body["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_deactivate_report() {
        let store = InMemoryStore::new();
        let report = store.seed(report_fixture(ReportType::Lost, Some("A1"), None));
        let server = session_server(&store);

        let response = server
            .patch(&format!("/api/admin/reports/{}/deactivate", report.id))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["is_active"], false);

        server
            .patch(&format!("/api/admin/reports/{}/deactivate", Uuid::new_v4()))
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
