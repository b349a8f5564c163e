use actix_web::{get, web, Responder, Result};
use serde_derive::Serialize;

#[derive(Serialize)]
struct Greeting {
    message: String,
}

#[tracing::instrument(name = "Root greeting.")]
#[get("/")]
pub async fn index_handler() -> Result<impl Responder> {
    Ok(web::Json(Greeting {
        message: "Hello World".to_string(),
    }))
}
