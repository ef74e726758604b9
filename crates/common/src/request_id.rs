//! Request correlation middleware.
//!
//! Every request runs inside a span tagged with the service name and an
//! `x-request-id`, which is taken from the client when supplied and echoed
//! back on the response.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Client-supplied ids longer than this are replaced with a fresh one.
const MAX_REQUEST_ID_LEN: usize = 128;

fn incoming_request_id(request: &Request) -> Option<String> {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
}

/// Use with `axum::middleware::from_fn_with_state(service_name, request_id_middleware)`.
pub async fn request_id_middleware(
    State(service): State<&'static str>,
    request: Request,
    next: Next,
) -> Response<Body> {
    let request_id =
        incoming_request_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "request",
        service,
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    async move {
        tracing::debug!("Request started");

        let mut response = next.run(request).await;

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response
                .headers_mut()
                .insert(REQUEST_ID_HEADER.clone(), value);
        }

        let status = response.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), "Request failed");
        } else {
            tracing::info!(status = status.as_u16(), "Request completed");
        }

        response
    }
    .instrument(span)
    .await
}
