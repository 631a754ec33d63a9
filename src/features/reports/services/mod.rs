mod report_service;

pub use report_service::{build_report, ReportService, SubmittedReport};
