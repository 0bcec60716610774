use axum::body::Bytes;
use axum::extract::{Extension, State};
use axum::routing::{delete, get, post, put};
use axum::{middleware, Json, Router};
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::application::todo_service::ToDoEngine;
use crate::domain::todo::{CreateItem, DeleteItem, ToDoItem, UpdateItem};
use crate::http::trace::{propagate_trace_id, TraceId};
use crate::http::types::{ApiError, ApiMessage};

#[derive(Clone)]
pub struct AppState<S: ToDoEngine> { pub engine: S }

pub fn router<S: ToDoEngine + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/create", post(create_item::<S>).fallback(method_not_allowed))
        // HEAD would otherwise be served by the GET handler.
        .route("/get", get(get_items::<S>).head(method_not_allowed).fallback(method_not_allowed))
        .route("/update", put(update_item::<S>).fallback(method_not_allowed))
        .route("/delete", delete(delete_item::<S>).fallback(method_not_allowed))
        .with_state(state)
        .layer(middleware::from_fn(propagate_trace_id))
}

async fn create_item<S: ToDoEngine>(State(state): State<AppState<S>>, Extension(trace): Extension<TraceId>, body: Bytes) -> Result<ApiMessage, ApiError> {
    let input: CreateItem = parse_body(&body, &trace)?;
    state.engine.create_item(&input.name, &input.description).await
        .map_err(|e| internal_error("Failed to create ToDo item", e, &trace))?;
    Ok(message(StatusCode::CREATED, "ToDo item created successfully", &trace))
}

async fn get_items<S: ToDoEngine>(State(state): State<AppState<S>>, Extension(trace): Extension<TraceId>) -> Result<Json<Vec<ToDoItem>>, ApiError> {
    let items = state.engine.get_items().await
        .map_err(|e| internal_error("Failed to get ToDo items", e, &trace))?;
    Ok(Json(items))
}

async fn update_item<S: ToDoEngine>(State(state): State<AppState<S>>, Extension(trace): Extension<TraceId>, body: Bytes) -> Result<ApiMessage, ApiError> {
    let input: UpdateItem = parse_body(&body, &trace)?;
    state.engine.update_item(input.id, &input.description).await
        .map_err(|e| internal_error("Failed to update ToDo item", e, &trace))?;
    Ok(message(StatusCode::OK, "ToDo item updated successfully", &trace))
}

async fn delete_item<S: ToDoEngine>(State(state): State<AppState<S>>, Extension(trace): Extension<TraceId>, body: Bytes) -> Result<ApiMessage, ApiError> {
    let input: DeleteItem = parse_body(&body, &trace)?;
    state.engine.delete_item(input.id).await
        .map_err(|e| internal_error("Failed to delete ToDo item", e, &trace))?;
    Ok(message(StatusCode::OK, "ToDo item deleted successfully", &trace))
}

async fn method_not_allowed(Extension(trace): Extension<TraceId>) -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", &trace.0)
}

// Any body that is not the expected JSON shape is a bad request, whatever its content type.
fn parse_body<T: DeserializeOwned>(body: &[u8], trace: &TraceId) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request payload");
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid request payload", &trace.0)
    })
}

fn message(status: StatusCode, text: &str, trace: &TraceId) -> ApiMessage {
    ApiMessage { status, message: text.to_string(), trace_id: trace.0.clone() }
}

fn internal_error<E: std::fmt::Display>(context: &str, e: E, trace: &TraceId) -> ApiError {
    tracing::error!(error = %e, "{context}");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, format!("{context}: {e}"), &trace.0)
}
