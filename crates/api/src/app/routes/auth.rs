use std::sync::Arc;

use axum::{Extension, Json, response::Response};

use crate::app::AppServices;
use crate::app::dto::{AuthRequest, AuthResponse};
use crate::app::errors::service_error_to_response;

/// `POST /api/auth` — log in, registering the account on first use.
pub async fn authenticate(
    Extension(services): Extension<Arc<AppServices>>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, Response> {
    let token = services
        .authenticate(&req.username, &req.password)
        .await
        .map_err(service_error_to_response)?;

    Ok(Json(AuthResponse { token }))
}
