use crate::store::{IncidentStore, ZoneInsert};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub distress: i64,
    pub report: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            distress: 2,
            report: 2,
        }
    }
}

/// The threshold rule on its own: a location is dangerous when either
/// incident count reaches its threshold.
pub fn meets_danger_threshold(distress_count: i64, report_count: i64, t: Thresholds) -> bool {
    distress_count >= t.distress || report_count >= t.report
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocationOutcome {
    Created,
    AlreadyClassified,
    BelowThreshold,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub locations_scanned: usize,
    pub zones_created: usize,
    pub already_classified: usize,
    pub below_threshold: usize,
    pub failed: usize,
}

/// One classification pass over every location referenced by a real-time
/// fix. Failing to read the location set aborts the pass; a failure on a
/// single location is recorded and the scan moves on.
pub async fn run_pass<S: IncidentStore>(store: &S, thresholds: Thresholds) -> anyhow::Result<PassSummary> {
    let loc_ids = store.distinct_location_ids().await?;
    let mut summary = PassSummary {
        locations_scanned: loc_ids.len(),
        ..Default::default()
    };

    for loc_id in loc_ids {
        match classify_location(store, loc_id, thresholds).await {
            Ok(LocationOutcome::Created) => {
                info!(loc_id, "danger zone created");
                summary.zones_created += 1;
            }
            Ok(LocationOutcome::AlreadyClassified) => summary.already_classified += 1,
            Ok(LocationOutcome::BelowThreshold) => summary.below_threshold += 1,
            Err(e) => {
                warn!(loc_id, error = %e, "failed to classify location");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

async fn classify_location<S: IncidentStore>(
    store: &S,
    loc_id: i64,
    thresholds: Thresholds,
) -> anyhow::Result<LocationOutcome> {
    if store.zone_exists(loc_id).await? {
        return Ok(LocationOutcome::AlreadyClassified);
    }

    let distress_count = store.distress_count(loc_id).await?;
    let report_count = store.report_count(loc_id).await?;

    if !meets_danger_threshold(distress_count, report_count, thresholds) {
        return Ok(LocationOutcome::BelowThreshold);
    }

    // A concurrent pass may have won the race; the unique constraint
    // turns that into a no-op rather than a duplicate row.
    match store.insert_danger_zone(loc_id).await? {
        ZoneInsert::Created => Ok(LocationOutcome::Created),
        ZoneInsert::AlreadyExists => Ok(LocationOutcome::AlreadyClassified),
    }
}
