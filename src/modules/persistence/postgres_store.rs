//! PostgreSQL implementation of [`RegistryStore`].
//!
//! Match uniqueness is enforced by the `matches_lost_sighting_rule_key`
//! constraint; batches insert with `ON CONFLICT DO NOTHING` inside one
//! transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::matches::models::{NewMatch, VehicleMatch};
use crate::features::reports::models::{CreateReport, Report, ReportQuery};
use crate::modules::persistence::RegistryStore;

const REPORT_COLUMNS: &str = "id, report_type, car_name, model, color, chassis, plate, \
     location, phone, notes, image_path, is_active, created_at";

const MATCH_COLUMNS: &str = "id, lost_id, sighting_id, rule, created_at";

pub struct PgRegistryStore {
    pool: PgPool,
}

impl PgRegistryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistryStore for PgRegistryStore {
    async fn insert_report(&self, report: CreateReport) -> Result<Report> {
        let sql = format!(
            r#"
            INSERT INTO reports (report_type, car_name, model, color, chassis, plate,
                                 location, phone, notes, image_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            REPORT_COLUMNS
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(report.report_type)
            .bind(report.car_name)
            .bind(report.model)
            .bind(report.color)
            .bind(report.chassis)
            .bind(report.plate)
            .bind(report.location)
            .bind(report.phone)
            .bind(report.notes)
            .bind(report.image_path)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert report: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get_report(&self, id: Uuid) -> Result<Option<Report>> {
        let sql = format!("SELECT {} FROM reports WHERE id = $1", REPORT_COLUMNS);

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get report {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn find_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder
            .push(REPORT_COLUMNS)
            .push(" FROM reports WHERE ")
            .push(query.rule.column())
            .push(" = ")
            .push_bind(query.key.clone());

        if let Some(report_type) = query.report_type {
            builder.push(" AND report_type = ").push_bind(report_type);
        }
        if query.active_only {
            builder.push(" AND is_active = TRUE");
        }
        builder.push(" ORDER BY created_at ASC");

        builder
            .build_query_as::<Report>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query reports by {}: {:?}", query.rule, e);
                AppError::Database(e)
            })
    }

    async fn record_matches(&self, matches: &[NewMatch]) -> Result<u64> {
        if matches.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for m in matches {
            let result = sqlx::query(
                r#"
                INSERT INTO matches (lost_id, sighting_id, rule)
                VALUES ($1, $2, $3)
                ON CONFLICT (lost_id, sighting_id, rule) DO NOTHING
                "#,
            )
            .bind(m.lost_id)
            .bind(m.sighting_id)
            .bind(m.rule)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to record match, rolling back batch: {:?}", e);
                AppError::Database(e)
            })?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        debug!(
            "Match batch committed: candidates={}, inserted={}",
            matches.len(),
            inserted
        );

        Ok(inserted)
    }

    async fn find_matches_involving(&self, report_ids: &[Uuid]) -> Result<Vec<VehicleMatch>> {
        if report_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            r#"
            SELECT {}
            FROM matches
            WHERE lost_id = ANY($1) OR sighting_id = ANY($1)
            ORDER BY created_at DESC
            "#,
            MATCH_COLUMNS
        );

        sqlx::query_as::<_, VehicleMatch>(&sql)
            .bind(report_ids.to_vec())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query matches: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_reports(&self, offset: i64, limit: i64) -> Result<(Vec<Report>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count reports: {:?}", e);
                AppError::Database(e)
            })?;

        let sql = format!(
            "SELECT {} FROM reports ORDER BY created_at DESC OFFSET $1 LIMIT $2",
            REPORT_COLUMNS
        );
        let rows = sqlx::query_as::<_, Report>(&sql)
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((rows, total))
    }

    async fn list_matches(&self, offset: i64, limit: i64) -> Result<(Vec<VehicleMatch>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM matches")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count matches: {:?}", e);
                AppError::Database(e)
            })?;

        let sql = format!(
            "SELECT {} FROM matches ORDER BY created_at DESC OFFSET $1 LIMIT $2",
            MATCH_COLUMNS
        );
        let rows = sqlx::query_as::<_, VehicleMatch>(&sql)
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list matches: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((rows, total))
    }

    async fn deactivate_report(&self, id: Uuid) -> Result<Option<Report>> {
        let sql = format!(
            "UPDATE reports SET is_active = FALSE WHERE id = $1 RETURNING {}",
            REPORT_COLUMNS
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to deactivate report {}: {:?}", id, e);
                AppError::Database(e)
            })
    }
}
