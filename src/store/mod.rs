use anyhow::Result;

pub mod postgres;

/// Outcome of a conflict-aware zone insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneInsert {
    Created,
    /// Another pass (or instance) classified the location first; the
    /// unique constraint on loc_id swallowed the insert.
    AlreadyExists,
}

/// What the classifier needs from the relational store. Production runs
/// against Postgres; tests run against an in-memory table set.
#[allow(async_fn_in_trait)]
pub trait IncidentStore {
    /// Distinct non-NULL location ids referenced by real-time fixes.
    async fn distinct_location_ids(&self) -> Result<Vec<i64>>;

    async fn zone_exists(&self, loc_id: i64) -> Result<bool>;

    /// Distress signals whose real-time fix belongs to this location
    /// (joined through real_location, never real_id = loc_id directly).
    async fn distress_count(&self, loc_id: i64) -> Result<i64>;

    /// Reports filed directly against this location.
    async fn report_count(&self, loc_id: i64) -> Result<i64>;

    async fn insert_danger_zone(&self, loc_id: i64) -> Result<ZoneInsert>;
}
