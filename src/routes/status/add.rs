use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add status check.")]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::status_check::Create>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::form_error(errors.to_string()));
    }

    let item: models::StatusCheck = form.into_inner().into();
    db::status_check::insert(pg_pool.get_ref(), item)
        .await
        .map(web::Json)
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            JsonResponse::internal_server_error("Record not added")
        })
}
