use guardia_zones::api::{self, AppState};
use guardia_zones::classifier::Thresholds;
use guardia_zones::config::AppConfig;
use guardia_zones::store::postgres::PgIncidentStore;
use guardia_zones::{db, scheduler};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("Starting Guardia Zones Service...");

    // Init DB
    let pool = db::init_pool(&config.database_url).await?;
    db::ensure_schema(&pool).await?;
    info!("Connected to database");

    let thresholds = Thresholds {
        distress: config.distress_threshold,
        report: config.report_threshold,
    };
    let store = PgIncidentStore::new(pool);

    if config.classifier_interval_secs > 0 {
        tokio::spawn(scheduler::run_classifier_loop(
            store.clone(),
            thresholds,
            config.classifier_interval_secs,
        ));
    } else {
        info!("Classifier loop disabled; POST /zones/classify to run a pass");
    }

    let state = AppState { store, thresholds };
    let listener = tokio::net::TcpListener::bind(&config.http_bind).await?;
    info!("Listening on http://{}", config.http_bind);
    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
