use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderValue;
use tracing::Instrument;
use uuid::Uuid;

pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Correlation id of the current request.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

/// Takes the caller's trace id (or mints one), exposes it to handlers and
/// echoes it back on the response.
pub async fn propagate_trace_id(mut req: Request, next: Next) -> Response {
    let trace_id = req
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    req.extensions_mut().insert(TraceId(trace_id.clone()));

    let span = tracing::info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path()
    );
    let mut res = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        res.headers_mut().insert(TRACE_ID_HEADER, value);
    }
    res
}
