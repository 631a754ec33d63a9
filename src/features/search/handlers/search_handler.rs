use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::search::dtos::{SearchRequestDto, SearchResponseDto};
use crate::features::search::services::SearchService;
use crate::shared::types::ApiResponse;

/// Search for a vehicle by plate or chassis number
///
/// Public endpoint. Returns `clear`, `raised` or `matched` with the
/// resolved lost/sighting pairs of any recorded match.
#[utoipa::path(
    post,
    path = "/api/search",
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Search result", body = ApiResponse<SearchResponseDto>),
        (status = 400, description = "Missing search value")
    ),
    tag = "search"
)]
pub async fn search(
    State(service): State<Arc<SearchService>>,
    AppJson(dto): AppJson<SearchRequestDto>,
) -> Result<Json<ApiResponse<SearchResponseDto>>> {
    let outcome = service.search(dto.mode, &dto.value).await?;
    Ok(Json(ApiResponse::success(Some(outcome.into()), None, None)))
}
