//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the database and the image upload store.

pub mod persistence;
pub mod storage;
