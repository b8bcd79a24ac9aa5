use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize)]
pub struct Location {
    pub id: i64, // bigserial
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Columns a sparse update may touch. Unknown request keys are dropped by
/// serde before they get anywhere near SQL.
pub const UPDATABLE_COLUMNS: &[&str] = &["name", "latitude", "longitude"];

/// Sparse update of a location. Presence of a field (not nullability)
/// decides whether the column is written.
#[derive(Debug, Default, Deserialize)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.latitude.is_none() && self.longitude.is_none()
    }

    /// SET clause fragments in bind order, e.g. `["name = $1", "latitude = $2"]`.
    /// The caller binds values in the same order, then the row id last.
    pub fn set_clauses(&self) -> Vec<String> {
        let present = [
            ("name", self.name.is_some()),
            ("latitude", self.latitude.is_some()),
            ("longitude", self.longitude.is_some()),
        ];
        present
            .iter()
            .filter(|(col, is_set)| *is_set && UPDATABLE_COLUMNS.contains(col))
            .enumerate()
            .map(|(i, (col, _))| format!("{} = ${}", col, i + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_produces_no_clauses() {
        let patch = LocationPatch::default();
        assert!(patch.is_empty());
        assert!(patch.set_clauses().is_empty());
    }

    #[test]
    fn only_present_fields_reach_the_set_clause() {
        let patch = LocationPatch {
            name: Some("Plaza Central".to_string()),
            latitude: None,
            longitude: Some(-100.391404),
        };
        assert_eq!(patch.set_clauses(), vec!["name = $1", "longitude = $2"]);
    }

    #[test]
    fn unknown_request_keys_are_ignored() {
        let patch: LocationPatch =
            serde_json::from_str(r#"{"name": "Parque Norte", "id": 99, "loc_id": 7}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Parque Norte"));
        assert!(patch.latitude.is_none());
        assert_eq!(patch.set_clauses(), vec!["name = $1"]);
    }
}
