//! Router assembly.

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::middleware::{AuthState, auth_middleware};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::{AppServices, ServiceError};

/// Build the full application router.
pub fn build_app(services: Arc<AppServices>) -> Router {
    let auth_state = AuthState {
        jwt: services.jwt().clone(),
    };

    let protected = Router::new()
        .route("/info", get(routes::info::get_info))
        .route("/sendCoin", post(routes::transfer::send_coin))
        .route("/buy/:item", get(routes::purchase::buy_item))
        .route_layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    let api = Router::new()
        .route("/auth", post(routes::auth::authenticate))
        .merge(protected);

    Router::new().nest("/api", api).layer(Extension(services))
}
