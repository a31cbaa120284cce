//! PostgreSQL 连接池、迁移与可用性探测

use crate::config::DatabaseConfig;
use secrecy::ExposeSecret;
use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// 启动阶段的数据库错误
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// 建立连接池，启动时即建立最小连接数
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(config.url.expose_secret())
        .await
        .map_err(DbError::Connect)?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database pool ready"
    );

    Ok(pool)
}

/// 应用 migrations/ 下尚未执行的迁移
pub async fn migrate(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Schema is up to date");
    Ok(())
}

/// 一次可用性探测的结果
///
/// 只暴露固定的描述，底层错误只进日志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Up,
    Down,
    TimedOut,
}

impl Probe {
    pub fn is_up(self) -> bool {
        self == Probe::Up
    }

    pub fn describe(self) -> &'static str {
        match self {
            Probe::Up => "reachable",
            Probe::Down => "unreachable",
            Probe::TimedOut => "timed out",
        }
    }
}

/// 在 `budget` 内执行 `SELECT 1`
pub async fn probe(pool: &PgPool, budget: Duration) -> Probe {
    metrics::gauge!("db_pool_connections", "state" => "open").set(pool.size() as f64);
    metrics::gauge!("db_pool_connections", "state" => "idle").set(pool.num_idle() as f64);

    let query = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool);

    match tokio::time::timeout(budget, query).await {
        Ok(Ok(_)) => Probe::Up,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Database probe failed");
            Probe::Down
        }
        Err(_) => {
            tracing::warn!(budget_ms = budget.as_millis() as u64, "Database probe timed out");
            Probe::TimedOut
        }
    }
}
