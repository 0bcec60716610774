use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
    #[serde(rename = "traceID")]
    pub trace_id: String,
}

impl IntoResponse for ApiMessage {
    fn into_response(self) -> Response { (self.status, Json(self)).into_response() }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(rename = "traceID")]
    pub trace_id: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, trace_id: &str) -> Self {
        Self { status, error: error.into(), trace_id: trace_id.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response { (self.status, Json(self)).into_response() }
}
