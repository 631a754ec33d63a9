use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{extract::Request, middleware::Next, response::Response, Router};
use chrono::{Duration, Utc};
use fake::faker::lorem::en::Word;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::models::AdminSession;
use crate::features::matches::models::{MatchRule, NewMatch, VehicleMatch};
use crate::features::reports::models::{CreateReport, Report, ReportQuery, ReportType};
use crate::modules::persistence::RegistryStore;

/// A report with random descriptive fields and the given identifiers
pub fn report_fixture(
    report_type: ReportType,
    plate: Option<&str>,
    chassis: Option<&str>,
) -> Report {
    Report {
        id: Uuid::new_v4(),
        report_type,
        car_name: Word().fake(),
        model: None,
        color: Some(Word().fake()),
        chassis: chassis.map(str::to_string),
        plate: plate.map(str::to_string),
        location: None,
        phone: PhoneNumber().fake(),
        notes: None,
        image_path: None,
        is_active: true,
        created_at: Utc::now(),
    }
}

/// In-memory [`RegistryStore`] with the same uniqueness and atomicity rules
/// as the PostgreSQL store
#[derive(Default)]
pub struct InMemoryStore {
    reports: Mutex<Vec<Report>>,
    matches: Mutex<Vec<VehicleMatch>>,
    fail_match_writes: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a report directly, bypassing submission
    pub fn seed(&self, report: Report) -> Report {
        self.reports.lock().unwrap().push(report.clone());
        report
    }

    /// Seed a match row directly
    pub fn seed_match(&self, lost: &Report, sighting: &Report, rule: MatchRule) {
        self.matches.lock().unwrap().push(VehicleMatch {
            id: Uuid::new_v4(),
            lost_id: lost.id,
            sighting_id: sighting.id,
            rule,
            created_at: Utc::now(),
        });
    }

    /// Make every following `record_matches` call fail
    pub fn fail_match_writes(&self) {
        self.fail_match_writes.store(true, Ordering::SeqCst);
    }

    pub fn report_count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    pub fn stored_matches(&self) -> Vec<VehicleMatch> {
        self.matches.lock().unwrap().clone()
    }

    /// Number of store operations performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn next_timestamp(&self, len: usize) -> chrono::DateTime<Utc> {
        // Strictly increasing so newest-first ordering is deterministic
        Utc::now() + Duration::milliseconds(len as i64)
    }
}

#[async_trait]
impl RegistryStore for InMemoryStore {
    async fn insert_report(&self, report: CreateReport) -> Result<Report> {
        self.touch();
        let mut reports = self.reports.lock().unwrap();
        let stored = Report {
            id: Uuid::new_v4(),
            report_type: report.report_type,
            car_name: report.car_name,
            model: report.model,
            color: report.color,
            chassis: report.chassis,
            plate: report.plate,
            location: report.location,
            phone: report.phone,
            notes: report.notes,
            image_path: report.image_path,
            is_active: true,
            created_at: self.next_timestamp(reports.len()),
        };
        reports.push(stored.clone());
        Ok(stored)
    }

    async fn get_report(&self, id: Uuid) -> Result<Option<Report>> {
        self.touch();
        let reports = self.reports.lock().unwrap();
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    async fn find_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        self.touch();
        let reports = self.reports.lock().unwrap();
        Ok(reports.iter().filter(|r| query.matches(r)).cloned().collect())
    }

    async fn record_matches(&self, batch: &[NewMatch]) -> Result<u64> {
        self.touch();
        if self.fail_match_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }

        let mut matches = self.matches.lock().unwrap();
        let mut existing: HashSet<_> = matches.iter().map(VehicleMatch::key).collect();
        let mut inserted = 0;

        for key in batch {
            if existing.insert(*key) {
                let created_at = self.next_timestamp(matches.len());
                matches.push(VehicleMatch {
                    id: Uuid::new_v4(),
                    lost_id: key.lost_id,
                    sighting_id: key.sighting_id,
                    rule: key.rule,
                    created_at,
                });
                inserted += 1;
            }
        }

        Ok(inserted)
    }

    async fn find_matches_involving(&self, report_ids: &[Uuid]) -> Result<Vec<VehicleMatch>> {
        self.touch();
        let matches = self.matches.lock().unwrap();
        let mut found: Vec<_> = matches
            .iter()
            .filter(|m| report_ids.contains(&m.lost_id) || report_ids.contains(&m.sighting_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn list_reports(&self, offset: i64, limit: i64) -> Result<(Vec<Report>, i64)> {
        self.touch();
        let reports = self.reports.lock().unwrap();
        let mut sorted = reports.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let page = sorted
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, reports.len() as i64))
    }

    async fn list_matches(&self, offset: i64, limit: i64) -> Result<(Vec<VehicleMatch>, i64)> {
        self.touch();
        let matches = self.matches.lock().unwrap();
        let mut sorted = matches.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let page = sorted
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, matches.len() as i64))
    }

    async fn deactivate_report(&self, id: Uuid) -> Result<Option<Report>> {
        self.touch();
        let mut reports = self.reports.lock().unwrap();
        Ok(reports.iter_mut().find(|r| r.id == id).map(|r| {
            r.is_active = false;
            r.clone()
        }))
    }
}

pub fn create_admin_session() -> AdminSession {
    let now = Utc::now();
    AdminSession {
        subject: "admin".to_string(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

async fn inject_admin_session_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_session());
    next.run(request).await
}

/// Wrap a router so every request carries an admin session
pub fn with_admin_session(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_session_middleware))
}
