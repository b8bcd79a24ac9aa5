use crate::db::{queries, DbPool};
use crate::models::distress::DistressSignal;
use crate::models::location::{Location, LocationPatch};
use crate::models::real_location::RealTimeLocation;
use crate::models::report::Report;
use crate::models::zone::{ZoneDetail, ZoneOverview, DANGER_ZONE};
use crate::store::{IncidentStore, ZoneInsert};
use anyhow::{bail, Result};
use sqlx::Row;

/// Postgres-backed store shared by the classifier and the REST surface.
#[derive(Clone)]
pub struct PgIncidentStore {
    pool: DbPool,
}

impl PgIncidentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_zones(&self) -> Result<Vec<ZoneOverview>> {
        let zones = sqlx::query_as::<_, ZoneOverview>(queries::SELECT_ALL_ZONES)
            .fetch_all(&self.pool)
            .await?;
        Ok(zones)
    }

    pub async fn get_zone(&self, id: i64) -> Result<Option<ZoneDetail>> {
        let zone = sqlx::query_as::<_, ZoneDetail>(queries::SELECT_ZONE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(zone)
    }

    pub async fn create_location(&self, name: &str, latitude: f64, longitude: f64) -> Result<Location> {
        let location = sqlx::query_as::<_, Location>(queries::INSERT_LOCATION)
            .bind(name)
            .bind(latitude)
            .bind(longitude)
            .fetch_one(&self.pool)
            .await?;
        Ok(location)
    }

    /// Applies a sparse patch. Returns the number of rows touched (0 when
    /// the id does not exist).
    pub async fn update_location(&self, id: i64, patch: &LocationPatch) -> Result<u64> {
        if patch.is_empty() {
            bail!("location patch contains no updatable fields");
        }

        let clauses = patch.set_clauses();
        let sql = format!(
            "UPDATE location SET {} WHERE id = ${}",
            clauses.join(", "),
            clauses.len() + 1
        );

        // Bind order must mirror LocationPatch::set_clauses.
        let mut query = sqlx::query(&sql);
        if let Some(name) = &patch.name {
            query = query.bind(name);
        }
        if let Some(latitude) = patch.latitude {
            query = query.bind(latitude);
        }
        if let Some(longitude) = patch.longitude {
            query = query.bind(longitude);
        }

        let result = query.bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn record_fix(
        &self,
        user_id: i64,
        loc_id: Option<i64>,
        latitude: f64,
        longitude: f64,
    ) -> Result<RealTimeLocation> {
        let fix = sqlx::query_as::<_, RealTimeLocation>(queries::INSERT_REAL_LOCATION)
            .bind(user_id)
            .bind(loc_id)
            .bind(latitude)
            .bind(longitude)
            .fetch_one(&self.pool)
            .await?;
        Ok(fix)
    }

    /// loc_id backfill for a fix recorded before its named location was known.
    pub async fn attach_fix_to_location(&self, fix_id: i64, loc_id: i64) -> Result<()> {
        sqlx::query(queries::UPDATE_REAL_LOCATION_LOC_ID)
            .bind(loc_id)
            .bind(fix_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn latest_fix(&self, user_id: i64) -> Result<Option<RealTimeLocation>> {
        let fix = sqlx::query_as::<_, RealTimeLocation>(queries::SELECT_LATEST_REAL_LOCATION)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(fix)
    }

    pub async fn create_distress(
        &self,
        description: &str,
        user_id: i64,
        real_id: i64,
    ) -> Result<DistressSignal> {
        let signal = sqlx::query_as::<_, DistressSignal>(queries::INSERT_DISTRESS)
            .bind(description)
            .bind(user_id)
            .bind(real_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(signal)
    }

    pub async fn create_report(
        &self,
        user_report: &str,
        address: Option<&str>,
        loc_id: i64,
        user_id: i64,
    ) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(queries::INSERT_REPORT)
            .bind(user_report)
            .bind(address)
            .bind(loc_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(report)
    }
}

impl IncidentStore for PgIncidentStore {
    async fn distinct_location_ids(&self) -> Result<Vec<i64>> {
        let rows = sqlx::query(queries::SELECT_DISTINCT_LOC_IDS)
            .fetch_all(&self.pool)
            .await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.try_get("loc_id")?);
        }
        Ok(ids)
    }

    async fn zone_exists(&self, loc_id: i64) -> Result<bool> {
        let row = sqlx::query(queries::SELECT_ZONE_EXISTS)
            .bind(loc_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("present")?)
    }

    async fn distress_count(&self, loc_id: i64) -> Result<i64> {
        let row = sqlx::query(queries::COUNT_DISTRESS_FOR_LOCATION)
            .bind(loc_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("distress_count")?)
    }

    async fn report_count(&self, loc_id: i64) -> Result<i64> {
        let row = sqlx::query(queries::COUNT_REPORTS_FOR_LOCATION)
            .bind(loc_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("report_count")?)
    }

    async fn insert_danger_zone(&self, loc_id: i64) -> Result<ZoneInsert> {
        let result = sqlx::query(queries::INSERT_ZONE)
            .bind(DANGER_ZONE)
            .bind(loc_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            Ok(ZoneInsert::AlreadyExists)
        } else {
            Ok(ZoneInsert::Created)
        }
    }
}
