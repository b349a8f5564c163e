use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "List status checks.")]
#[get("")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::status_check::fetch_all(pg_pool.get_ref())
        .await
        .map(web::Json)
        .map_err(|_err| JsonResponse::internal_server_error(""))
}
