//! Mediator contact details.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/contact` | No | Owner phone and WhatsApp link |

pub mod dtos;
pub mod handlers;
pub mod routes;
