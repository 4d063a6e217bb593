//! HTTP application assembly.
//!
//! [`build_app_router`] is the one place the LabForge routes meet the
//! middleware stack. The binary serves it as-is and the integration tests
//! drive it through `oneshot`, so both see identical behaviour.

use std::any::Any;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assemble `/health` and the `/courses` tree, both mounted at the root,
/// and wrap them in the shared middleware.
///
/// Outermost first, a request passes through:
///
/// - CORS, which answers preflights for the configured origins before
///   anything else runs
/// - `x-request-id` assignment (a UUID unless the caller sent one)
/// - an INFO-level trace span per request
/// - copying `x-request-id` onto the response
/// - a `408 Request Timeout` after `REQUEST_TIMEOUT_SECS`
/// - panic recovery, which turns a handler panic into the usual sanitized
///   `INTERNAL_ERROR` JSON body
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS policy for the catalog API: the configured origins may read and
/// mutate courses with JSON bodies.
///
/// `ServerConfig` rejects unparsable origins at load time, so the
/// `filter_map` never drops an entry that came through `from_env`.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Render a caught panic like any other internal error. The panic payload is
/// logged, never returned.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
