//! Lost and sighting report submission.
//!
//! A submitted report is normalized, stored, and immediately matched against
//! active reports of the opposite type.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports/{report_type}` | No | Submit a `lost` or `sighting` report (multipart) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
