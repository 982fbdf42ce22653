mod health;
mod orders;
mod pricing;
mod proposals;

#[cfg(test)]
mod api_tests;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = match &config.cors_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any),
            Err(_) => {
                tracing::warn!("invalid FQ_CORS_ORIGIN '{}'; CORS disabled", origin);
                CorsLayer::new()
            }
        },
        None => CorsLayer::new(),
    };

    let api = Router::new()
        .merge(health::router())
        .merge(pricing::router())
        .merge(orders::router())
        .merge(proposals::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
