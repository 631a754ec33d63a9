use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::*;
use crate::features::matches::models::VehicleMatch;
use crate::features::reports::models::Report;
use crate::modules::persistence::RegistryStore;
use crate::shared::constants::DASHBOARD_LIMIT;

/// Service for mediator queries and moderation
pub struct AdminService {
    store: Arc<dyn RegistryStore>,
}

impl AdminService {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Latest reports and latest matches, newest first
    pub async fn dashboard(&self) -> Result<AdminDashboardDto> {
        let (reports, _) = self.store.list_reports(0, DASHBOARD_LIMIT).await?;
        let (matches, _) = self.store.list_matches(0, DASHBOARD_LIMIT).await?;

        let known = reports.iter().map(|r| (r.id, r.clone())).collect();
        let matches = self.resolve_matches(matches, known).await?;

        Ok(AdminDashboardDto {
            reports: reports.into_iter().map(Into::into).collect(),
            matches,
        })
    }

    pub async fn list_reports(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<AdminReportDto>, i64)> {
        let (reports, total) = self.store.list_reports(offset, limit).await?;
        Ok((reports.into_iter().map(Into::into).collect(), total))
    }

    /// List matches with both sides resolved
    pub async fn list_matches(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<AdminMatchDto>, i64)> {
        let (matches, total) = self.store.list_matches(offset, limit).await?;
        let items = self.resolve_matches(matches, HashMap::new()).await?;
        Ok((items, total))
    }

    /// Take a report out of matching and status checks
    pub async fn deactivate_report(&self, id: Uuid) -> Result<AdminReportDto> {
        let report = self
            .store
            .deactivate_report(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        info!("Report deactivated: id={}", report.id);
        Ok(report.into())
    }

    async fn resolve_matches(
        &self,
        matches: Vec<VehicleMatch>,
        mut known: HashMap<Uuid, Report>,
    ) -> Result<Vec<AdminMatchDto>> {
        let mut items = Vec::with_capacity(matches.len());
        for m in matches {
            let lost = self.lookup(&mut known, m.lost_id).await?;
            let sighting = self.lookup(&mut known, m.sighting_id).await?;
            items.push(AdminMatchDto::new(m, lost, sighting));
        }
        Ok(items)
    }

    async fn lookup(&self, known: &mut HashMap<Uuid, Report>, id: Uuid) -> Result<Option<Report>> {
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
