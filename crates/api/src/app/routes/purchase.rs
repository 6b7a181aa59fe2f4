use std::sync::Arc;

use axum::{Extension, extract::Path, http::StatusCode, response::Response};

use crate::app::AppServices;
use crate::app::errors::service_error_to_response;
use crate::context::AuthedUser;

/// `GET /api/buy/:item` — buy one unit of a catalog good.
pub async fn buy_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<AuthedUser>,
    Path(item): Path<String>,
) -> Result<StatusCode, Response> {
    services
        .buy_good(user.user_id(), &item)
        .await
        .map_err(service_error_to_response)?;

    Ok(StatusCode::OK)
}
