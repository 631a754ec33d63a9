use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::matches::models::{MatchRule, VehicleMatch};
use crate::features::reports::models::{Report, ReportType};

// =============================================================================
// SESSION DTOs
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AdminLoginDto {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Issued admin session token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminTokenDto {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: u64,
    pub expires_at: DateTime<Utc>,
}

// =============================================================================
// REPORT DTOs
// =============================================================================

/// Full report view for the mediator, including the reporter's phone
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminReportDto {
    pub id: Uuid,
    pub report_type: ReportType,
    pub car_name: String,
    pub model: Option<String>,
    pub color: Option<String>,
    pub chassis: Option<String>,
    pub plate: Option<String>,
    pub location: Option<String>,
    pub phone: String,
    pub notes: Option<String>,
    pub image_path: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for AdminReportDto {
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
            phone: r.phone,
            notes: r.notes,
            image_path: r.image_path,
            is_active: r.is_active,
            created_at: r.created_at,
        }
    }
}

// =============================================================================
// MATCH DTOs
// =============================================================================

/// A recorded match with both sides resolved.
/// A side is `null` if its report no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminMatchDto {
    pub id: Uuid,
    pub rule: MatchRule,
    pub created_at: DateTime<Utc>,
    pub lost: Option<AdminReportDto>,
    pub sighting: Option<AdminReportDto>,
}

impl AdminMatchDto {
    pub fn new(m: VehicleMatch, lost: Option<Report>, sighting: Option<Report>) -> Self {
        Self {
            id: m.id,
            rule: m.rule,
            created_at: m.created_at,
            lost: lost.map(Into::into),
            sighting: sighting.map(Into::into),
        }
    }
}

// =============================================================================
// DASHBOARD DTOs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminDashboardDto {
    pub reports: Vec<AdminReportDto>,
    pub matches: Vec<AdminMatchDto>,
}
