//! Match discovery between lost and sighting reports.
//!
//! Matches are created when a report is submitted and never updated.
//! They have no routes of their own; search and admin read them.

pub mod models;
pub mod services;

pub use services::{FoundMatch, MatchService};
