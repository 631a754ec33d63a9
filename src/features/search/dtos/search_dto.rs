use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::matches::models::MatchRule;
use crate::features::reports::dtos::ReportResponseDto;
use crate::features::search::models::{MatchPair, SearchOutcome, SearchStatus};

/// Request DTO for a vehicle lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchRequestDto {
    /// Identifier to search by (default: plate)
    #[serde(default)]
    pub mode: MatchRule,
    /// Raw plate or chassis number, separators allowed
    #[serde(default)]
    #[schema(example = "KH 1234-A")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchPairDto {
    pub rule: MatchRule,
    pub lost: ReportResponseDto,
    pub sighting: ReportResponseDto,
}

impl From<MatchPair> for MatchPairDto {
    fn from(p: MatchPair) -> Self {
        Self {
            rule: p.rule,
            lost: p.lost.into(),
            sighting: p.sighting.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponseDto {
    pub status: SearchStatus,
    pub results: Vec<MatchPairDto>,
}

impl From<SearchOutcome> for SearchResponseDto {
    fn from(o: SearchOutcome) -> Self {
        Self {
            status: o.status,
            results: o.results.into_iter().map(Into::into).collect(),
        }
    }
}
