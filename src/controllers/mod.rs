pub mod health;
pub mod notes;

use actix_web::{error, HttpRequest, HttpResponse};

/// Map JSON body deserialization failures to a structured 422 response.
///
/// actix's default is a plain-text 400; the serde detail already names
/// the offending field (e.g. "missing field `subject`"), so surface it.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    log::debug!("Rejected request body: {}", detail);

    let response = HttpResponse::UnprocessableEntity().json(serde_json::json!({
        "error": "Invalid request body",
        "detail": detail,
    }));

    error::InternalError::from_response(err, response).into()
}
