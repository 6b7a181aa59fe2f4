use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use coinshop_auth::validate_claims;

use crate::app::errors::json_error;
use crate::context::AuthedUser;
use crate::jwt::JwtCodec;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: JwtCodec,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers()).ok_or_else(unauthorized)?;

    let claims = state.jwt.decode(token).map_err(|_| unauthorized())?;
    validate_claims(&claims, Utc::now()).map_err(|_| unauthorized())?;

    req.extensions_mut()
        .insert(AuthedUser::new(claims.sub, claims.username));

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    json_error(StatusCode::UNAUTHORIZED, "unauthorized")
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
