use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::matches::models::MatchRule;
use crate::features::matches::FoundMatch;
use crate::features::reports::models::{Report, ReportType};

/// Public view of a report (the reporter's phone stays with the mediator)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub report_type: ReportType,
    pub car_name: String,
    pub model: Option<String>,
    pub color: Option<String>,
    pub chassis: Option<String>,
    pub plate: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            report_type: r.report_type,
            car_name: r.car_name,
            model: r.model,
            color: r.color,
            chassis: r.chassis,
            plate: r.plate,
            location: r.location,
            notes: r.notes,
            image_path: r.image_path,
            created_at: r.created_at,
        }
    }
}

/// Text fields of a report submission, trimmed as received from the form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReportFormDto {
    #[validate(length(max = 120, message = "Car name must not exceed 120 characters"))]
    pub car_name: String,
    #[validate(length(max = 120, message = "Model must not exceed 120 characters"))]
    pub model: String,
    #[validate(length(max = 60, message = "Color must not exceed 60 characters"))]
    pub color: String,
    #[validate(length(max = 60, message = "Chassis number must not exceed 60 characters"))]
    pub chassis: String,
    #[validate(length(max = 40, message = "Plate number must not exceed 40 characters"))]
    pub plate: String,
    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: String,
    #[validate(length(max = 40, message = "Phone must not exceed 40 characters"))]
    pub phone: String,
    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes: String,
}

/// Report submission form for OpenAPI documentation.
/// The handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct SubmitReportDto {
    /// Vehicle name, e.g. "Toyota Hilux" (required)
    pub car_name: String,
    pub model: Option<String>,
    pub color: Option<String>,
    /// Chassis number; at least one of chassis and plate is required
    pub chassis: Option<String>,
    /// Plate number; at least one of chassis and plate is required
    pub plate: Option<String>,
    pub location: Option<String>,
    /// Contact phone (required)
    pub phone: String,
    pub notes: Option<String>,
    /// Optional png, jpg, jpeg or webp image
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: Option<String>,
}

/// A counterpart found at submission time
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoundMatchDto {
    pub rule: MatchRule,
    pub report: ReportResponseDto,
}

impl From<FoundMatch> for FoundMatchDto {
    fn from(m: FoundMatch) -> Self {
        Self {
            rule: m.rule,
            report: m.report.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReportResponseDto {
    pub report: ReportResponseDto,
    pub matches: Vec<FoundMatchDto>,
}
