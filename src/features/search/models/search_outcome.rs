use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::matches::models::MatchRule;
use crate::features::reports::models::Report;

/// Outcome of a vehicle lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// No active lost report carries the identifier
    Clear,
    /// An active lost report carries the identifier, no match recorded yet
    Raised,
    /// At least one lost/sighting match involves the identifier
    Matched,
}

/// A recorded match with both sides resolved
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPair {
    pub rule: MatchRule,
    pub lost: Report,
    pub sighting: Report,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub results: Vec<MatchPair>,
}
