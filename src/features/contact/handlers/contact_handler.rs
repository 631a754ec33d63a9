use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::config::ContactConfig;
use crate::features::contact::dtos::ContactResponseDto;
use crate::shared::types::ApiResponse;

/// Get the mediator's contact details
#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "Contact details", body = ApiResponse<ContactResponseDto>)
    ),
    tag = "contact"
)]
pub async fn get_contact(
    State(contact): State<Arc<ContactConfig>>,
) -> Json<ApiResponse<ContactResponseDto>> {
    Json(ApiResponse::success(
        Some(contact.as_ref().into()),
        None,
        None,
    ))
}
