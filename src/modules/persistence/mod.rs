//! Persistence module for reports and matches
//!
//! Services depend on the [`RegistryStore`] trait; production wires in the
//! PostgreSQL implementation.

mod postgres_store;
mod registry_store;

pub use postgres_store::PgRegistryStore;
pub use registry_store::RegistryStore;
