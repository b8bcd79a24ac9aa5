use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize)]
pub struct DistressSignal {
    pub id: i64, // bigserial
    pub description: String,
    pub user_id: i64,
    pub real_id: i64, // FK to real_location, not to location
    pub distress_at: NaiveDateTime,
}
