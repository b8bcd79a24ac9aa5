use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize)]
pub struct RealTimeLocation {
    pub id: i64, // bigserial
    pub user_id: i64,
    pub loc_id: Option<i64>, // DDL says NULL until the fix is tied to a named location
    pub latitude: f64,
    pub longitude: f64,
    pub location_at: NaiveDateTime,
}
