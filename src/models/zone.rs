use serde::Serialize;
use sqlx::FromRow;

/// The only zone type the classifier produces today.
pub const DANGER_ZONE: &str = "Danger Zone";

/// Row shape of the zones listing: zone joined with its location plus
/// live-computed incident counts.
#[derive(Debug, FromRow, Serialize)]
pub struct ZoneOverview {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub zone_type: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distress_count: i64,
    pub report_count: i64,
}

#[derive(Debug, FromRow, Serialize)]
pub struct ZoneDetail {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub zone_type: String,
    pub location_name: String,
}
