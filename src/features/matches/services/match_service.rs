use std::sync::Arc;

use tracing::{debug, info};

use crate::core::error::Result;
use crate::features::matches::models::{MatchKey, MatchRule, NewMatch};
use crate::features::reports::models::{Report, ReportQuery};
use crate::modules::persistence::RegistryStore;

/// A counterpart report found for a submitted report
#[derive(Debug, Clone, PartialEq)]
pub struct FoundMatch {
    pub rule: MatchRule,
    pub report: Report,
}

/// Discovers and records matches between lost and sighting reports
pub struct MatchService {
    store: Arc<dyn RegistryStore>,
}

impl MatchService {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Find every active opposite-type report sharing the plate or chassis
    /// of `report`, and record the new matches in one batch.
    ///
    /// One counterpart may be returned twice, once per rule. The result
    /// includes matches that were already stored; storage itself never
    /// receives a duplicate `(lost_id, sighting_id, rule)` triple.
    pub async fn find_matches_for(&self, report: &Report) -> Result<Vec<FoundMatch>> {
        let opposite = report.report_type.opposite();
        let mut found = Vec::new();

        for (rule, key) in report.identifiers() {
            let candidates = self
                .store
                .find_reports(&ReportQuery::active(opposite, rule, key))
                .await?;

            debug!(
                "Match candidates for report {}: rule={}, count={}",
                report.id,
                rule,
                candidates.len()
            );

            found.extend(
                candidates
                    .into_iter()
                    .map(|other| FoundMatch { rule, report: other }),
            );
        }

        if found.is_empty() {
            return Ok(found);
        }

        let batch: Vec<NewMatch> = found
            .iter()
            .map(|m| MatchKey::between(report, &m.report, m.rule))
            .collect();

        let inserted = self.store.record_matches(&batch).await?;

        info!(
            "Matches recorded for {} report {}: found={}, new={}",
            report.report_type,
            report.id,
            found.len(),
            inserted
        );

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::reports::models::ReportType;
    use crate::shared::test_helpers::{report_fixture, InMemoryStore};
    use tokio_test::assert_ok;

    fn service(store: &Arc<InMemoryStore>) -> MatchService {
        MatchService::new(store.clone())
    }

    #[tokio::test]
    async fn test_plate_match_is_returned_and_stored_once() {
        let store = InMemoryStore::new();
        let sighting = store.seed(report_fixture(ReportType::Sighting, Some("X1"), None));
        let lost = store.seed(report_fixture(ReportType::Lost, Some("X1"), None));

        let found = assert_ok!(service(&store).find_matches_for(&lost).await);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rule, MatchRule::Plate);
        assert_eq!(found[0].report.id, sighting.id);

        let stored = store.stored_matches();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].lost_id, lost.id);
        assert_eq!(stored[0].sighting_id, sighting.id);
        assert_eq!(stored[0].rule, MatchRule::Plate);
    }

    #[tokio::test]
    async fn test_sighting_side_orients_ids() {
        let store = InMemoryStore::new();
        let lost = store.seed(report_fixture(ReportType::Lost, None, Some("VIN77")));
        let sighting = store.seed(report_fixture(ReportType::Sighting, None, Some("VIN77")));

        let found = service(&store).find_matches_for(&sighting).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rule, MatchRule::Chassis);
        let stored = store.stored_matches();
        assert_eq!(stored[0].lost_id, lost.id);
        assert_eq!(stored[0].sighting_id, sighting.id);
    }

    #[tokio::test]
    async fn test_repeated_discovery_is_idempotent() {
        let store = InMemoryStore::new();
        store.seed(report_fixture(ReportType::Sighting, Some("X1"), Some("C9")));
        let lost = store.seed(report_fixture(ReportType::Lost, Some("X1"), Some("C9")));
        let service = service(&store);

        let first = service.find_matches_for(&lost).await.unwrap();
        let second = service.find_matches_for(&lost).await.unwrap();

        // The return value is evidence, even when nothing new is stored
        assert_eq!(first.len(), 2);
        assert_eq!(second, first);
        assert_eq!(store.stored_matches().len(), 2);
    }

    #[tokio::test]
    async fn test_plate_and_chassis_yield_two_rows() {
        let store = InMemoryStore::new();
        let sighting = store.seed(report_fixture(ReportType::Sighting, Some("P1"), Some("C1")));
        let lost = store.seed(report_fixture(ReportType::Lost, Some("P1"), Some("C1")));

        let found = service(&store).find_matches_for(&lost).await.unwrap();

        let rules: Vec<_> = found.iter().map(|m| m.rule).collect();
        assert_eq!(rules, vec![MatchRule::Plate, MatchRule::Chassis]);
        assert!(found.iter().all(|m| m.report.id == sighting.id));

        let stored = store.stored_matches();
        assert_eq!(stored.len(), 2);
        assert_ne!(stored[0].rule, stored[1].rule);
    }

    #[tokio::test]
    async fn test_same_type_and_inactive_reports_are_ignored() {
        let store = InMemoryStore::new();
        store.seed(report_fixture(ReportType::Lost, Some("X1"), None));
        let mut inactive = report_fixture(ReportType::Sighting, Some("X1"), None);
        inactive.is_active = false;
        store.seed(inactive);
        let lost = store.seed(report_fixture(ReportType::Lost, Some("X1"), None));

        let found = service(&store).find_matches_for(&lost).await.unwrap();

        assert!(found.is_empty());
        assert!(store.stored_matches().is_empty());
    }

    #[tokio::test]
    async fn test_no_candidates_means_no_write() {
        let store = InMemoryStore::new();
        store.fail_match_writes();
        let lost = store.seed(report_fixture(ReportType::Lost, Some("NOPE"), None));

        // A write would fail, so success proves none was attempted
        let found = assert_ok!(service(&store).find_matches_for(&lost).await);
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_failed_batch_stores_nothing() {
        let store = InMemoryStore::new();
        store.seed(report_fixture(ReportType::Sighting, Some("X1"), Some("C1")));
        let lost = store.seed(report_fixture(ReportType::Lost, Some("X1"), Some("C1")));
        store.fail_match_writes();

        let result = service(&store).find_matches_for(&lost).await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(store.stored_matches().is_empty());
    }
}
