use todolist::{application::todo_service::ToDoEngineImpl, http::routing, http::routing::todos, infrastructure::file_store::FileListStore};
use axum::body::to_bytes;
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;

fn app(dir: &TempDir) -> Router {
    let engine = ToDoEngineImpl::new(FileListStore::new(dir.path().join("ToDoList.txt")));
    routing::app(todos::router(todos::AppState { engine }))
}

#[tokio::test]
async fn acceptance_create_get_update_delete() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    // create
    let res = request(&app, "POST", "/create", Some(json!({ "name": "Buy milk", "description": "2%", "id": 42 }).to_string())).await;
    assert_eq!(res.status(), 201);
    let body = body_json(res).await;
    assert_eq!(body["message"], "ToDo item created successfully");
    assert!(body["traceID"].as_str().is_some_and(|t| !t.is_empty()));
    request(&app, "POST", "/create", Some(json!({ "name": "Walk dog", "description": "park" }).to_string())).await;

    // get
    let res = request(&app, "GET", "/get", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(body_json(res).await, json!([
        { "id": 1, "name": "Buy milk", "description": "2%" },
        { "id": 2, "name": "Walk dog", "description": "park" },
    ]));

    // update
    let res = request(&app, "PUT", "/update", Some(json!({ "id": 1, "description": "skimmed" }).to_string())).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await["message"], "ToDo item updated successfully");

    // delete
    let res = request(&app, "DELETE", "/delete", Some(json!({ "id": 2 }).to_string())).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await["message"], "ToDo item deleted successfully");

    let res = request(&app, "GET", "/get", None).await;
    assert_eq!(body_json(res).await, json!([{ "id": 1, "name": "Buy milk", "description": "skimmed" }]));
}

#[tokio::test]
async fn wrong_method_is_405() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    for (method, path) in [("GET", "/create"), ("POST", "/get"), ("HEAD", "/get"), ("POST", "/update"), ("GET", "/delete")] {
        let res = request(&app, method, path, None).await;
        assert_eq!(res.status(), 405, "{method} {path}");
        if method != "HEAD" {
            assert_eq!(body_json(res).await["error"], "Method not allowed");
        }
    }
}

#[tokio::test]
async fn malformed_body_is_400() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let res = request(&app, "POST", "/create", Some("{not json".into())).await;
    assert_eq!(res.status(), 400);
    assert_eq!(body_json(res).await["error"], "Invalid request payload");
    let res = request(&app, "PUT", "/update", None).await;
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn store_failures_are_500_with_detail() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let res = request(&app, "GET", "/get", None).await;
    assert_eq!(res.status(), 500);
    let error = body_json(res).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Failed to get ToDo items: ToDo list file does not exist"), "{error}");

    request(&app, "POST", "/create", Some(json!({ "name": "a", "description": "b" }).to_string())).await;
    let res = request(&app, "PUT", "/update", Some(json!({ "id": 99, "description": "x\"y" }).to_string())).await;
    assert_eq!(res.status(), 500);
    let body = body_json(res).await;
    assert_eq!(body["error"], "Failed to update ToDo item: item with id 99 could not be found");
}

#[tokio::test]
async fn exhausted_ids_are_500() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    std::fs::write(dir.path().join("ToDoList.txt"), format!("{},A,a\n", i64::MAX)).unwrap();
    let res = request(&app, "POST", "/create", Some(json!({ "name": "B", "description": "b" }).to_string())).await;
    assert_eq!(res.status(), 500);
    let error = body_json(res).await["error"].as_str().unwrap().to_string();
    assert_eq!(error, format!("Failed to create ToDo item: no id is available after {}", i64::MAX));
}

#[tokio::test]
async fn trace_id_is_echoed() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/create")
        .header("x-trace-id", "abc-123")
        .body(axum::body::Body::from(json!({ "name": "n", "description": "d" }).to_string()))
        .unwrap();
    let res = tower::ServiceExt::oneshot(app.clone(), req).await.unwrap();
    assert_eq!(res.headers()["x-trace-id"], "abc-123");
    assert_eq!(body_json(res).await["traceID"], "abc-123");
}

#[tokio::test]
async fn health_is_ok() {
    let dir = TempDir::new().unwrap();
    let res = request(&app(&dir), "GET", "/health", None).await;
    assert_eq!(res.status(), 200);
}

async fn body_json(res: hyper::Response<axum::body::Body>) -> Value {
    serde_json::from_slice(&to_bytes(res.into_body(), 1024 * 1024).await.unwrap()).unwrap()
}

async fn request(app: &Router, method: &str, path: &str, body: Option<String>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Request, Method};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(json) => req.header("content-type", "application/json").body(Body::from(json)).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}
