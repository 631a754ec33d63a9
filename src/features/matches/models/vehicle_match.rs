use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::{Report, ReportType};

/// Identifier that produced a match, matching database enum
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "match_rule", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    #[default]
    Plate,
    Chassis,
}

impl MatchRule {
    pub const ALL: [MatchRule; 2] = [MatchRule::Plate, MatchRule::Chassis];

    /// Report column holding the identifier for this rule
    pub fn column(self) -> &'static str {
        match self {
            MatchRule::Plate => "plate",
            MatchRule::Chassis => "chassis",
        }
    }
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Database model for a recorded lost/sighting correspondence
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VehicleMatch {
    pub id: Uuid,
    pub lost_id: Uuid,
    pub sighting_id: Uuid,
    pub rule: MatchRule,
    pub created_at: DateTime<Utc>,
}

impl VehicleMatch {
    pub fn key(&self) -> MatchKey {
        MatchKey {
            lost_id: self.lost_id,
            sighting_id: self.sighting_id,
            rule: self.rule,
        }
    }
}

/// The unique `(lost_id, sighting_id, rule)` triple of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub lost_id: Uuid,
    pub sighting_id: Uuid,
    pub rule: MatchRule,
}

/// Data for recording a match
pub type NewMatch = MatchKey;

impl MatchKey {
    /// Orient a pair of opposite reports into lost/sighting sides.
    /// `report` decides the orientation; `other` is assumed opposite.
    pub fn between(report: &Report, other: &Report, rule: MatchRule) -> Self {
        let (lost_id, sighting_id) = match report.report_type {
            ReportType::Lost => (report.id, other.id),
            ReportType::Sighting => (other.id, report.id),
        };

        Self {
            lost_id,
            sighting_id,
            rule,
        }
    }
}
