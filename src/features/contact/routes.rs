use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::config::ContactConfig;
use crate::features::contact::handlers;

pub fn routes(contact: Arc<ContactConfig>) -> Router {
    Router::new()
        .route("/api/contact", get(handlers::get_contact))
        .with_state(contact)
}
