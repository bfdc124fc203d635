pub mod config;
pub mod error;
pub mod process;

pub use crate::config::{ApiConfig, CorsConfig, InvertedIntervals};
pub use crate::error::ApiError;
pub use crate::process::{ProcessRequest, ProcessResponse};

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use eyre::{Result, WrapErr as _};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Per-request settings the handlers need
#[derive(Clone, Debug)]
pub struct ApiState {
    pub inverted_intervals: InvertedIntervals,
}

pub fn router(config: &ApiConfig) -> Result<Router> {
    with_layers(Router::new().route("/api/process", post(process::process)), config)
}

/// State, body limit, timeout, CORS and tracing around `routes`
fn with_layers(routes: Router<ApiState>, config: &ApiConfig) -> Result<Router> {
    let cors = config.cors.layer().wrap_err("Invalid CORS config")?;
    let state = ApiState { inverted_intervals: config.inverted_intervals };

    Ok(routes
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
