use std::sync::Arc;

use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::matches::{FoundMatch, MatchService};
use crate::features::reports::dtos::ReportFormDto;
use crate::features::reports::models::{CreateReport, Report, ReportType};
use crate::modules::persistence::RegistryStore;
use crate::modules::storage::{LocalImageStore, UploadedImage};
use crate::shared::constants::{
    MSG_LOST_REPORT_RECORDED, MSG_REPORT_FIELDS_REQUIRED, MSG_REPORT_MATCHED,
    MSG_SIGHTING_REPORT_RECORDED,
};
use crate::shared::normalize::{normalize_chassis, normalize_plate};

/// A stored report together with the matches found for it
#[derive(Debug, Clone)]
pub struct SubmittedReport {
    pub report: Report,
    pub matches: Vec<FoundMatch>,
}

impl SubmittedReport {
    /// Acknowledgement shown to the reporter
    pub fn message(&self) -> &'static str {
        if !self.matches.is_empty() {
            return MSG_REPORT_MATCHED;
        }
        match self.report.report_type {
            ReportType::Lost => MSG_LOST_REPORT_RECORDED,
            ReportType::Sighting => MSG_SIGHTING_REPORT_RECORDED,
        }
    }
}

/// Service for lost and sighting report submissions
pub struct ReportService {
    store: Arc<dyn RegistryStore>,
    images: Arc<LocalImageStore>,
    matcher: Arc<MatchService>,
}

impl ReportService {
    pub fn new(
        store: Arc<dyn RegistryStore>,
        images: Arc<LocalImageStore>,
        matcher: Arc<MatchService>,
    ) -> Self {
        Self {
            store,
            images,
            matcher,
        }
    }

    /// Validate, store and match a new report.
    ///
    /// Invalid input is rejected before anything is stored. An image that
    /// cannot be stored is dropped and the report is created without it.
    /// A failure while recording matches is returned as an error even though
    /// the report itself was stored.
    pub async fn submit(
        &self,
        report_type: ReportType,
        form: ReportFormDto,
        image: Option<UploadedImage>,
    ) -> Result<SubmittedReport> {
        let mut new_report = build_report(report_type, form)?;

        new_report.image_path = match self.images.save(image).await {
            Ok(path) => path,
            Err(e) => {
                warn!("Image upload skipped: {}", e);
                None
            }
        };

        let report = self.store.insert_report(new_report).await?;
        info!(
            "Report created: id={}, type={}, plate={:?}, chassis={:?}",
            report.id, report.report_type, report.plate, report.chassis
        );

        let matches = self.matcher.find_matches_for(&report).await?;

        Ok(SubmittedReport { report, matches })
    }
}

/// Trim and normalize form input into a storable report
pub fn build_report(report_type: ReportType, form: ReportFormDto) -> Result<CreateReport> {
    let car_name = form.car_name.trim().to_string();
    let phone = form.phone.trim().to_string();
    let chassis = non_empty(normalize_chassis(form.chassis.trim()));
    let plate = non_empty(normalize_plate(form.plate.trim()));

    if car_name.is_empty() || phone.is_empty() || (chassis.is_none() && plate.is_none()) {
        return Err(AppError::Validation(MSG_REPORT_FIELDS_REQUIRED.to_string()));
    }

    Ok(CreateReport {
        report_type,
        car_name,
        model: optional_text(&form.model),
        color: optional_text(&form.color),
        chassis,
        plate,
        location: optional_text(&form.location),
        phone,
        notes: optional_text(&form.notes),
        image_path: None,
    })
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn optional_text(value: &str) -> Option<String> {
    non_empty(value.trim().to_string())
}
