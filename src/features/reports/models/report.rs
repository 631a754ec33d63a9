use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::matches::models::MatchRule;

/// Report type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Lost,
    Sighting,
}

impl ReportType {
    /// The type a report of this type is matched against
    pub fn opposite(self) -> Self {
        match self {
            ReportType::Lost => ReportType::Sighting,
            ReportType::Sighting => ReportType::Lost,
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::Lost => write!(f, "lost"),
            ReportType::Sighting => write!(f, "sighting"),
        }
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ReportType::Lost),
            "sighting" => Ok(ReportType::Sighting),
            other => Err(format!("Unknown report type: {}", other)),
        }
    }
}

/// Database model for a lost or sighting report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Report {
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

impl Report {
    /// Normalized identifier stored under the given rule, if any
    pub fn identifier(&self, rule: MatchRule) -> Option<&str> {
        let value = match rule {
            MatchRule::Plate => self.plate.as_deref(),
            MatchRule::Chassis => self.chassis.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Non-empty identifiers in rule order (plate first)
    pub fn identifiers(&self) -> impl Iterator<Item = (MatchRule, &str)> {
        MatchRule::ALL
            .into_iter()
            .filter_map(|rule| self.identifier(rule).map(|key| (rule, key)))
    }
}

/// Data for creating a new report, identifiers already normalized
#[derive(Debug, Clone)]
pub struct CreateReport {
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
}

/// Query by one identifier column
#[derive(Debug, Clone)]
pub struct ReportQuery {
    pub rule: MatchRule,
    pub key: String,
    pub report_type: Option<ReportType>,
    pub active_only: bool,
}

impl ReportQuery {
    /// Active reports of one type carrying `key` under `rule`
    pub fn active(report_type: ReportType, rule: MatchRule, key: impl Into<String>) -> Self {
        Self {
            rule,
            key: key.into(),
            report_type: Some(report_type),
            active_only: true,
        }
    }

    /// Every report carrying `key` under `rule`, whatever its type or state
    pub fn any(rule: MatchRule, key: impl Into<String>) -> Self {
        Self {
            rule,
            key: key.into(),
            report_type: None,
            active_only: false,
        }
    }

    pub fn matches(&self, report: &Report) -> bool {
        report.identifier(self.rule) == Some(self.key.as_str())
            && self.report_type.is_none_or(|t| t == report.report_type)
            && (!self.active_only || report.is_active)
    }
}
