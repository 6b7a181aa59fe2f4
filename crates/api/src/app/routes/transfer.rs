use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode, response::Response};

use crate::app::AppServices;
use crate::app::dto::SendCoinRequest;
use crate::app::errors::service_error_to_response;
use crate::context::AuthedUser;

/// `POST /api/sendCoin` — transfer coins to another user by name.
pub async fn send_coin(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<AuthedUser>,
    Json(req): Json<SendCoinRequest>,
) -> Result<StatusCode, Response> {
    services
        .send_coins(user.user_id(), user.username(), &req.to_user, req.amount)
        .await
        .map_err(service_error_to_response)?;

    Ok(StatusCode::OK)
}
