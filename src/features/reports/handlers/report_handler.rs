use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{ReportFormDto, SubmitReportDto, SubmitReportResponseDto};
use crate::features::reports::models::ReportType;
use crate::features::reports::services::ReportService;
use crate::modules::storage::UploadedImage;
use crate::shared::constants::MSG_REPORT_FIELD_TOO_LONG;
use crate::shared::types::ApiResponse;

/// Submit a lost or sighting report
///
/// Accepts multipart/form-data with the vehicle fields and an optional
/// `image`. The new report is matched against active reports of the
/// opposite type, and any counterpart found is returned with it.
#[utoipa::path(
    post,
    path = "/api/reports/{report_type}",
    tag = "reports",
    params(
        ("report_type" = String, Path, description = "`lost` or `sighting`")
    ),
    request_body(
        content = SubmitReportDto,
        content_type = "multipart/form-data",
        description = "Vehicle details with an optional png/jpg/jpeg/webp image",
    ),
    responses(
        (status = 201, description = "Report recorded", body = ApiResponse<SubmitReportResponseDto>),
        (status = 400, description = "Missing required fields or malformed form"),
        (status = 404, description = "Unknown report type")
    )
)]
pub async fn submit_report(
    State(service): State<Arc<ReportService>>,
    Path(report_type): Path<String>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<SubmitReportResponseDto>>)> {
    let report_type: ReportType = report_type
        .parse()
        .map_err(|_| AppError::NotFound(format!("Unknown report type: {}", report_type)))?;

    let (form, image) = read_report_form(multipart).await?;
    form.validate().map_err(|e| {
        debug!("Report form rejected: {}", e);
        AppError::Validation(MSG_REPORT_FIELD_TOO_LONG.to_string())
    })?;

    let submitted = service.submit(report_type, form, image).await?;
    let message = submitted.message().to_string();

    let dto = SubmitReportResponseDto {
        report: submitted.report.into(),
        matches: submitted.matches.into_iter().map(Into::into).collect(),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(dto), Some(message), None)),
    ))
}

async fn read_report_form(
    mut multipart: Multipart,
) -> Result<(ReportFormDto, Option<UploadedImage>)> {
    let mut form = ReportFormDto::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == "image" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let data = field.bytes().await.map_err(|e| {
                AppError::BadRequest(format!("Failed to read image data: {}", e))
            })?;
            image = Some(UploadedImage {
                file_name,
                data: data.to_vec(),
            });
            continue;
        }

        let slot = match field_name.as_str() {
            "car_name" => &mut form.car_name,
            "model" => &mut form.model,
            "color" => &mut form.color,
            "chassis" => &mut form.chassis,
            "plate" => &mut form.plate,
            "location" => &mut form.location,
            "phone" => &mut form.phone,
            "notes" => &mut form.notes,
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
                continue;
            }
        };
        // Length limits apply to the trimmed value
        let text = field.text().await.map_err(|e| {
            AppError::BadRequest(format!("Failed to read {} field: {}", field_name, e))
        })?;
        *slot = text.trim().to_string();
    }

    Ok((form, image))
}
