use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use serde_derive::Serialize;

/// Structured error body. Success responses carry the record (or list of
/// records) directly, so only the error path goes through this type.
#[derive(Serialize, Debug)]
pub(crate) struct JsonResponse {
    pub(crate) status: String,
    pub(crate) code: u16,
    pub(crate) message: String,
}

impl JsonResponse {
    pub(crate) fn form_error(message: String) -> actix_web::Error {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn internal_server_error(message: &str) -> actix_web::Error {
        let msg = if !message.trim().is_empty() {
            message.to_string()
        } else {
            String::from("Internal error")
        };
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    fn error(status_code: StatusCode, message: String) -> actix_web::Error {
        let body = JsonResponse {
            status: "Error".to_string(),
            code: status_code.as_u16(),
            message: message.clone(),
        };
        let response = HttpResponse::build(status_code).json(body);
        error::InternalError::from_response(message, response).into()
    }
}
