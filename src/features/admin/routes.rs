use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::core::middleware::admin_auth_middleware;
use crate::features::admin::handlers;
use crate::features::admin::services::{AdminAuthService, AdminService};

/// Create admin routes
///
/// Login is public, everything else requires a bearer session token
pub fn routes(admin_service: Arc<AdminService>, auth_service: Arc<AdminAuthService>) -> Router {
    let protected = protected_routes(admin_service).route_layer(
        middleware::from_fn_with_state(auth_service.clone(), admin_auth_middleware),
    );

    Router::new()
        .route("/api/admin/login", post(handlers::login))
        .with_state(auth_service)
        .merge(protected)
}

/// Admin routes without the session layer
pub fn protected_routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/api/admin/dashboard", get(handlers::dashboard))
        .route("/api/admin/reports", get(handlers::list_reports))
        .route(
            "/api/admin/reports/{id}/deactivate",
            patch(handlers::deactivate_report),
        )
        .route("/api/admin/matches", get(handlers::list_matches))
        .with_state(admin_service)
}
