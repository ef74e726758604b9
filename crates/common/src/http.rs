//! Layers every service router is wrapped in.

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    request_id::request_id_middleware,
    telemetry::{METRICS_PATH, metrics_middleware, prometheus_handle, record_app_info, render_metrics},
};

/// Browsers call both services directly from the frontend, so any origin is allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
        .allow_origin(Any)
}

/// Add the metrics route and wrap `router` with request metrics, request ids,
/// CORS, compression and security headers.
pub fn standard_layers(router: Router, service: &'static str, version: &'static str) -> Router {
    prometheus_handle();
    record_app_info(service, version);

    router
        .route(METRICS_PATH, get(render_metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn_with_state(service, request_id_middleware))
        .layer(cors_layer())
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}
