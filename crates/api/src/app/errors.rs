use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::app::services::ServiceError;

/// The wire error envelope is `{"errors": "..."}`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "errors": message.into(),
        })),
    )
        .into_response()
}

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Internal => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
        ServiceError::AuthFailed => {
            json_error(StatusCode::UNAUTHORIZED, format!("unauthorized: {err}"))
        }
        // Everything else is a rejected request with a stable message.
        _ => json_error(StatusCode::BAD_REQUEST, format!("bad request: {err}")),
    }
}
