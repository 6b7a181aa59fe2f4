use std::sync::Arc;

use axum::{Extension, Json, response::Response};

use crate::app::AppServices;
use crate::app::dto::{InfoResponse, info_to_response};
use crate::app::errors::service_error_to_response;
use crate::context::AuthedUser;

/// `GET /api/info` — balance, inventory and transfer history.
pub async fn get_info(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<AuthedUser>,
) -> Result<Json<InfoResponse>, Response> {
    let info = services
        .info(user.user_id())
        .await
        .map_err(service_error_to_response)?;

    Ok(Json(info_to_response(info)))
}
