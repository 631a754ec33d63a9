use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::matches::models::{NewMatch, VehicleMatch};
use crate::features::reports::models::{CreateReport, Report, ReportQuery};

/// Storage operations the registry needs for reports and matches
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Insert a report and return it with its assigned id and timestamp
    async fn insert_report(&self, report: CreateReport) -> Result<Report>;

    async fn get_report(&self, id: Uuid) -> Result<Option<Report>>;

    /// Reports whose identifier column equals the query key, oldest first
    async fn find_reports(&self, query: &ReportQuery) -> Result<Vec<Report>>;

    /// Record a batch of matches atomically, ignoring triples already stored.
    ///
    /// Returns the number of rows actually inserted. On error nothing from
    /// the batch is stored.
    async fn record_matches(&self, matches: &[NewMatch]) -> Result<u64>;

    /// Matches referencing any of the reports as lost or sighting side,
    /// newest first
    async fn find_matches_involving(&self, report_ids: &[Uuid]) -> Result<Vec<VehicleMatch>>;

    /// Reports newest first, with the total count
    async fn list_reports(&self, offset: i64, limit: i64) -> Result<(Vec<Report>, i64)>;

    /// Matches newest first, with the total count
    async fn list_matches(&self, offset: i64, limit: i64) -> Result<(Vec<VehicleMatch>, i64)>;

    /// Clear `is_active` on a report; `None` when the report does not exist
    async fn deactivate_report(&self, id: Uuid) -> Result<Option<Report>>;
}
