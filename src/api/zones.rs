use crate::api::error::ApiError;
use crate::api::AppState;
use crate::classifier::{self, PassSummary};
use crate::models::zone::{ZoneDetail, ZoneOverview};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ZonesResponse {
    pub zones: Vec<ZoneOverview>,
}

#[derive(Debug, Serialize)]
pub struct ZoneResponse {
    pub zone: ZoneDetail,
}

pub async fn list_zones(State(state): State<AppState>) -> Result<Json<ZonesResponse>, ApiError> {
    let zones = state.store.list_zones().await?;
    Ok(Json(ZonesResponse { zones }))
}

pub async fn get_zone(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ZoneResponse>, ApiError> {
    let zone = state
        .store
        .get_zone(id)
        .await?
        .ok_or(ApiError::ZoneNotFound)?;
    Ok(Json(ZoneResponse { zone }))
}

/// On-demand trigger for a classification pass; the response is the pass
/// summary. Periodic runs use the same entry point via the scheduler.
pub async fn run_classification(
    State(state): State<AppState>,
) -> Result<Json<PassSummary>, ApiError> {
    let summary = classifier::run_pass(&state.store, state.thresholds).await?;
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zone::DANGER_ZONE;

    #[test]
    fn list_envelope_matches_dashboard_contract() {
        let response = ZonesResponse {
            zones: vec![ZoneOverview {
                id: 1,
                zone_type: DANGER_ZONE.to_string(),
                location_name: "A".to_string(),
                latitude: 20.65,
                longitude: -100.39,
                distress_count: 2,
                report_count: 0,
            }],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["zones"].is_array());
        assert_eq!(value["zones"][0]["type"], "Danger Zone");
        assert_eq!(value["zones"][0]["distress_count"], 2);
    }

    #[test]
    fn detail_envelope_wraps_a_single_zone() {
        let response = ZoneResponse {
            zone: ZoneDetail {
                id: 7,
                zone_type: DANGER_ZONE.to_string(),
                location_name: "B".to_string(),
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["zone"]["id"], 7);
        assert_eq!(value["zone"]["location_name"], "B");
    }

    #[test]
    fn empty_zone_list_serializes_as_empty_array() {
        let value = serde_json::to_value(ZonesResponse { zones: vec![] }).unwrap();
        assert_eq!(value, serde_json::json!({ "zones": [] }));
    }
}
