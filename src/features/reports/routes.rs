use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature (public)
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports/{report_type}", post(handlers::submit_report))
        .with_state(service)
}
