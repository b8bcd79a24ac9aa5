use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub mod queries;
pub mod schema;

pub type DbPool = Pool<Postgres>;

pub async fn init_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(50)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Runs the idempotent DDL so a fresh database is usable without a
/// separate migration step. Statements must stay in dependency order.
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    for ddl in schema::ALL_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
