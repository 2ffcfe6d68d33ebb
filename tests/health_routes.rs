//! Router-level tests for the health endpoints.
//!
//! Each test builds its own `AppState`, so health status never leaks
//! between tests running in parallel.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use healthline::config::AppConfig;
use healthline::routes::create_router;
use healthline::state::AppState;
use healthline::{HealthReport, HealthStatus, HealthStore};

const CONFIG: &str = r#"
[http]
host = "127.0.0.1"
port = 0

[health]
toggle_path = "/toggle-health"
"#;

fn app_with(config: &str) -> (Router, HealthStore) {
    let config: AppConfig = config.parse().unwrap();
    let state = AppState::new(config);
    let store = state.health.clone();
    (create_router(state), store)
}

fn app() -> (Router, HealthStore) {
    app_with(CONFIG)
}

async fn get(app: Router, uri: &str, request_id: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(id) = request_id {
        builder = builder.header("x-request-id", id);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_plain_text_up() {
    let (app, _store) = app();
    let response = get(app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    assert_eq!(body_string(response).await, "UP");
}

#[tokio::test]
async fn test_plain_text_down_with_reason() {
    let (app, store) = app();
    store.set_unhealthy("Test reason");

    let response = get(app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_string(response).await, "DOWN: Test reason");
}

#[tokio::test]
async fn test_json_down_scenario() {
    let (app, store) = app();
    store.set_unhealthy("Database connection failed");

    let response = get(app, "/health/json", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        body_string(response).await,
        r#"{"status":"DOWN","reason":"Database connection failed"}"#
    );
}

#[tokio::test]
async fn test_json_up_has_no_reason() {
    let (app, _store) = app();
    let response = get(app, "/health/json", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "UP");
    assert!(value.get("reason").is_none());
}

#[tokio::test]
async fn test_use_json_applies_to_main_path() {
    let (app, store) = app_with(
        r#"
[http]
host = "127.0.0.1"
port = 0

[health]
use_json = true
"#,
    );
    store.set_status(HealthStatus::Down);
    store.set_reason("Manual reason");

    let response = get(app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let report: HealthReport = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(report.status, HealthStatus::Down);
    assert_eq!(report.reason, "Manual reason");
}

#[tokio::test]
async fn test_request_id_is_forwarded() {
    let (app, store) = app();
    store.set_unhealthy("Test reason");

    let response = get(app, "/health/json", Some("test-request-id-2")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.headers()["x-request-id"], "test-request-id-2");
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let (app, _store) = app();
    let response = get(app, "/health", None).await;

    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_handler_without_middleware_omits_request_id() {
    use axum::routing::get as get_route;
    use healthline::{HandlerOptions, HealthHandler};

    let store = HealthStore::new();
    let app = Router::new().route(
        "/health",
        get_route(HealthHandler::new(store, HandlerOptions::default())),
    );

    let response = get(app, "/health", Some("ignored")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_none());
    assert_eq!(body_string(response).await, "UP");
}

#[tokio::test]
async fn test_toggle_flips_status() {
    let (app, store) = app();

    let response = get(app.clone(), "/toggle-health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.status(), HealthStatus::Down);
    assert_eq!(store.reason(), "Service manually marked as unhealthy");

    let response = get(app.clone(), "/health", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    get(app.clone(), "/toggle-health", None).await;
    assert_eq!(store.status(), HealthStatus::Up);
    assert_eq!(store.reason(), "");

    let response = get(app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_toggle_not_mounted_by_default() {
    let (app, store) = app_with("[http]\nhost = \"127.0.0.1\"\nport = 0\n");
    let response = get(app, "/toggle-health", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.status(), HealthStatus::Up);
}

#[tokio::test]
async fn test_concurrent_requests_see_consistent_state() {
    let (app, store) = app();

    let writer = {
        let store = store.clone();
        tokio::spawn(async move {
            for i in 0..200 {
                if i % 2 == 0 {
                    store.set_unhealthy("flapping");
                } else {
                    store.set_healthy();
                }
                tokio::task::yield_now().await;
            }
        })
    };

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                for _ in 0..25 {
                    let response = get(app.clone(), "/health", None).await;
                    let status = response.status();
                    let body = body_string(response).await;
                    match status {
                        StatusCode::OK => assert_eq!(body, "UP"),
                        StatusCode::SERVICE_UNAVAILABLE => assert_eq!(body, "DOWN: flapping"),
                        other => panic!("unexpected status {other}"),
                    }
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }
}
