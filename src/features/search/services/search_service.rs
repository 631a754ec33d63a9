use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::matches::models::{MatchRule, VehicleMatch};
use crate::features::reports::models::{Report, ReportQuery, ReportType};
use crate::features::search::models::{MatchPair, SearchOutcome, SearchStatus};
use crate::modules::persistence::RegistryStore;
use crate::shared::constants::MSG_SEARCH_VALUE_REQUIRED;
use crate::shared::normalize::{normalize_chassis, normalize_plate};

/// Service answering "is this vehicle lost, and has it been seen?"
pub struct SearchService {
    store: Arc<dyn RegistryStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Look up a plate or chassis number.
    ///
    /// Status is `raised` when an active lost report carries the key and
    /// `clear` otherwise; any recorded match touching a report with that key
    /// (active or not, either type) overrides it to `matched`.
    pub async fn search(&self, mode: MatchRule, raw_value: &str) -> Result<SearchOutcome> {
        let raw_value = raw_value.trim();
        let key = match mode {
            MatchRule::Plate => normalize_plate(raw_value),
            MatchRule::Chassis => normalize_chassis(raw_value),
        };
        if key.is_empty() {
            return Err(AppError::Validation(MSG_SEARCH_VALUE_REQUIRED.to_string()));
        }

        let lost = self
            .store
            .find_reports(&ReportQuery::active(ReportType::Lost, mode, key.as_str()))
            .await?;
        let mut status = if lost.is_empty() {
            SearchStatus::Clear
        } else {
            SearchStatus::Raised
        };

        let related = self
            .store
            .find_reports(&ReportQuery::any(mode, key.as_str()))
            .await?;
        let related_ids: Vec<Uuid> = related.iter().map(|r| r.id).collect();

        let matches = dedupe_matches(self.store.find_matches_involving(&related_ids).await?);

        let mut results = Vec::with_capacity(matches.len());
        if !matches.is_empty() {
            status = SearchStatus::Matched;

            let mut known: HashMap<Uuid, Report> =
                related.into_iter().map(|r| (r.id, r)).collect();
            for m in matches {
                let lost = self.resolve(&mut known, m.lost_id).await?;
                let sighting = self.resolve(&mut known, m.sighting_id).await?;
                match (lost, sighting) {
                    (Some(lost), Some(sighting)) => results.push(MatchPair {
                        rule: m.rule,
                        lost,
                        sighting,
                    }),
                    _ => warn!("Match {} references a missing report, skipping", m.id),
                }
            }
        }

        info!(
            "Search by {}: key={}, status={:?}, results={}",
            mode,
            key,
            status,
            results.len()
        );

        Ok(SearchOutcome { status, results })
    }

    async fn resolve(
        &self,
        known: &mut HashMap<Uuid, Report>,
        id: Uuid,
    ) -> Result<Option<Report>> {
        if let Some(report) = known.get(&id) {
            return Ok(Some(report.clone()));
        }

        let report = self.store.get_report(id).await?;
        if let Some(ref r) = report {
            known.insert(id, r.clone());
        }
        Ok(report)
    }
}

/// Keep the first row of each `(lost_id, sighting_id, rule)` triple
fn dedupe_matches(matches: Vec<VehicleMatch>) -> Vec<VehicleMatch> {
    let mut seen = HashSet::new();
    matches.into_iter().filter(|m| seen.insert(m.key())).collect()
}
