mod report;

pub use report::{CreateReport, Report, ReportQuery, ReportType};
