use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use ulid::Ulid;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Request-scoped id threaded through handlers and error envelopes.
#[derive(Clone, Debug)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    fn mint() -> Self {
        Self(format!("corr_{}", Ulid::new()))
    }
}

fn supplied_id(headers: &HeaderMap) -> Option<CorrelationId> {
    let value = headers.get(CORRELATION_HEADER)?.to_str().ok()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(CorrelationId(value.to_string()))
}

/// Threads an `x-correlation-id` through the request, minting one when the
/// caller sent none, and echoes it on the response.
pub async fn correlation_middleware(mut request: Request<Body>, next: Next) -> Response {
    let id = supplied_id(request.headers()).unwrap_or_else(CorrelationId::mint);
    request.extensions_mut().insert(id.clone());
    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id.0) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(CORRELATION_HEADER), value);
    }
    response
}
