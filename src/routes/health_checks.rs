use crate::health::HealthChecker;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

// Reachability problems are reported in the body, never as a 5xx.
#[tracing::instrument(name = "Health check.", skip(health_checker))]
#[get("/health")]
pub async fn health_check(health_checker: web::Data<Arc<HealthChecker>>) -> Result<impl Responder> {
    let response = health_checker.check_all().await;
    Ok(web::Json(response))
}
