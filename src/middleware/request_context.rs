// Request context middleware - tags each request with an id and a tracing span

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request metadata inserted into request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Reuses a caller-supplied `x-request-id` when it is usable, otherwise
    /// generates a fresh one.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let supplied = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= 128);

        match supplied {
            Some(id) => Self::new(id),
            None => Self::new(format!("req-{}", Uuid::new_v4())),
        }
    }
}

/// Runs the rest of the stack inside a span carrying the request id and
/// echoes the id back on the response.
pub async fn request_context_middleware(mut request: Request, next: Next) -> Response {
    let context = RequestContext::from_headers(request.headers());
    let span = tracing::info_span!(
        "request",
        request_id = %context.request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(context.clone());

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&context.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_request_id() {
        let context = RequestContext::from_headers(&HeaderMap::new());
        assert!(context.request_id.starts_with("req-"));

        let other = RequestContext::from_headers(&HeaderMap::new());
        assert_ne!(context.request_id, other.request_id);
    }

    #[test]
    fn test_reuses_supplied_request_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("trace-abc"));

        let context = RequestContext::from_headers(&headers);
        assert_eq!(context.request_id, "trace-abc");
    }

    #[test]
    fn test_ignores_blank_request_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

        let context = RequestContext::from_headers(&headers);
        assert!(context.request_id.starts_with("req-"));
    }
}
