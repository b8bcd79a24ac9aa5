use crate::classifier::{self, Thresholds};
use crate::store::postgres::PgIncidentStore;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

/// Periodic classification driver. Ticks run back to back on one task,
/// so two passes can never overlap within a process; races against other
/// instances resolve at the zones unique constraint.
pub async fn run_classifier_loop(store: PgIncidentStore, thresholds: Thresholds, interval_secs: u64) {
    info!("Classifier loop running every {}s", interval_secs);

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match classifier::run_pass(&store, thresholds).await {
            Ok(summary) => info!(?summary, "classification pass finished"),
            Err(e) => error!("classification pass failed: {:#}", e),
        }
    }
}
