use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize)]
pub struct Report {
    pub id: i64, // bigserial
    pub user_report: String,
    pub address: Option<String>, // DDL says NULL
    pub loc_id: i64,
    pub user_id: i64,
    pub reported_at: NaiveDateTime,
}
