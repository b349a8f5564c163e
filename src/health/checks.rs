use super::models::{ComponentHealth, HealthCheckResponse};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_RESPONSE_THRESHOLD_MS: u64 = 1000;

pub struct HealthChecker {
    pg_pool: Arc<PgPool>,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(pg_pool: Arc<PgPool>) -> Self {
        Self {
            pg_pool,
            start_time: Instant::now(),
        }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let uptime = self.start_time.elapsed().as_secs();
        let mut response = HealthCheckResponse::new(version, uptime);

        let db_health = timeout(CHECK_TIMEOUT, self.check_database())
            .await
            .unwrap_or_else(|_| ComponentHealth::unhealthy("Timeout".to_string()));

        response.add_component("database".to_string(), db_health);

        response
    }

    #[tracing::instrument(name = "Check database health", skip(self))]
    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();

        match sqlx::query("SELECT 1 as health_check")
            .fetch_one(self.pg_pool.as_ref())
            .await
        {
            Ok(_) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                if elapsed_ms > SLOW_RESPONSE_THRESHOLD_MS {
                    ComponentHealth::degraded("Slow response".to_string(), elapsed_ms)
                } else {
                    ComponentHealth::healthy(elapsed_ms)
                }
            }
            Err(e) => {
                tracing::error!("Database health check failed: {:?}", e);
                ComponentHealth::unhealthy(e.to_string())
            }
        }
    }
}
