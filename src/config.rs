use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub http_bind: String,
    pub database_url: String,
    pub distress_threshold: i64,
    pub report_threshold: i64,
    pub classifier_interval_secs: u64,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let http_bind = env::var("HTTP_BIND").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let distress_threshold = env::var("DISTRESS_THRESHOLD")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .unwrap_or(2);
        let report_threshold = env::var("REPORT_THRESHOLD")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .unwrap_or(2);

        // 0 disables the in-process loop; POST /zones/classify still works.
        let classifier_interval_secs = env::var("CLASSIFIER_INTERVAL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600);

        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let db_name = env::var("DB_DATABASE").unwrap_or_else(|_| "guardia_admin".to_string());
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "guardia".to_string());
        let db_pwd = env::var("DB_PWD").unwrap_or_else(|_| "guardia".to_string());

        let database_url = format!(
            "postgres://{}:{}@{}:{}/{}",
            db_user, db_pwd, db_host, db_port, db_name
        );

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            http_bind,
            database_url,
            distress_threshold,
            report_threshold,
            classifier_interval_secs,
            log_level,
        })
    }
}
