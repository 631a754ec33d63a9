//! Mediator access to reports and matches.
//!
//! The admin logs in with the shared password and receives a short-lived
//! HS256 session token. Logging out means discarding the token.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/admin/login` | No | Exchange the password for a token |
//! | GET | `/api/admin/dashboard` | Bearer | Latest reports and matches |
//! | GET | `/api/admin/reports` | Bearer | Paginated reports |
//! | GET | `/api/admin/matches` | Bearer | Paginated matches |
//! | PATCH | `/api/admin/reports/{id}/deactivate` | Bearer | Deactivate a report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{AdminAuthService, AdminService};
