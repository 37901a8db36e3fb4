//! HTTP publisher integration tests
//!
//! Runs the publisher against a local stand-in for the strategy-signal
//! endpoint and checks exactly what goes over the wire.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    routing::any,
};
use serde_json::{Value, json};
use signalfeed_core::{SignalEntry, StrategyId, StrategySignalBatch};
use signalfeed_gateway::{AuthConfig, HttpSignalPublisher, PermissionClaims, PublisherConfig};
use signalfeed_ports::{PublishError, SignalPublisher};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

const SIGNAL_PATH: &str = "/api/v1/strategy-signal/";

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: Method,
    headers: HeaderMap,
    body: Value,
}

#[derive(Clone)]
struct EndpointState {
    status: StatusCode,
    reply: &'static str,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn record(
    State(state): State<EndpointState>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let body = serde_json::from_str(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(CapturedRequest {
        method,
        headers,
        body,
    });
    (state.status, state.reply)
}

/// Start a stand-in endpoint answering every request with `status`
async fn start_endpoint(
    status: StatusCode,
    reply: &'static str,
) -> (SocketAddr, Arc<Mutex<Vec<CapturedRequest>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = EndpointState {
        status,
        reply,
        requests: Arc::clone(&requests),
    };

    let app = Router::new()
        .route(SIGNAL_PATH, any(record))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, requests)
}

fn publisher(addr: SocketAddr, auth: AuthConfig) -> HttpSignalPublisher {
    let config = PublisherConfig::new(format!("http://{}{}", addr, SIGNAL_PATH))
        .with_timeout(Duration::from_secs(5))
        .with_auth(auth);
    HttpSignalPublisher::new(&config).unwrap()
}

fn batch() -> StrategySignalBatch {
    StrategySignalBatch::new(
        StrategyId::new(10).unwrap(),
        vec![
            SignalEntry::new("2023-08-03T10:45+0700", Some(0.5)),
            SignalEntry::new("2023-08-03T12:45+0700", Some(0.0)),
            SignalEntry::new("2023-08-03T13:00+0700", None),
        ],
    )
}

// ============================================================================
// Upload
// ============================================================================

#[tokio::test]
async fn test_publish_posts_batch_json() {
    let _ = env_logger::try_init();
    let (addr, requests) = start_endpoint(StatusCode::CREATED, r#"{"status":"ok"}"#).await;

    publisher(addr, AuthConfig::None)
        .publish(&batch())
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(
        requests[0].headers.get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(
        requests[0].body,
        json!({
            "strategy_id": 10,
            "signals": [
                {"signal_at": "2023-08-03T10:45+0700", "signal": {"S50": 0.5}},
                {"signal_at": "2023-08-03T12:45+0700", "signal": {"S50": 0.0}},
                {"signal_at": "2023-08-03T13:00+0700", "signal": {"S50": null}},
            ]
        })
    );
}

#[tokio::test]
async fn test_publish_sends_bearer_token() {
    let (addr, requests) = start_endpoint(StatusCode::OK, "{}").await;

    publisher(addr, AuthConfig::api_key("key", "secret"))
        .publish(&batch())
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer key.secret"
    );
    assert!(requests[0].headers.get("x-permission").is_none());
}

#[tokio::test]
async fn test_publish_sends_permission_claims() {
    let (addr, requests) = start_endpoint(StatusCode::OK, "{}").await;
    let claims = PermissionClaims {
        role_id: "2".to_string(),
        name: "guru".to_string(),
        can_login_admin_site: "False".to_string(),
        can_create_strategy: "True".to_string(),
        user_id: "42".to_string(),
        broker_id: "1".to_string(),
    };

    publisher(addr, AuthConfig::Permission(claims.clone()))
        .publish(&batch())
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    let raw = requests[0]
        .headers
        .get("x-permission")
        .unwrap()
        .to_str()
        .unwrap();
    let sent: PermissionClaims = serde_json::from_str(raw).unwrap();
    assert_eq!(sent, claims);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_rejection_carries_status_and_body() {
    let (addr, _requests) =
        start_endpoint(StatusCode::FORBIDDEN, r#"{"detail":"guru only"}"#).await;

    let err = publisher(addr, AuthConfig::api_key("key", "secret"))
        .publish(&batch())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PublishError::Rejected {
            status: 403,
            body: r#"{"detail":"guru only"}"#.to_string(),
        }
    );
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = publisher(addr, AuthConfig::None)
        .publish(&batch())
        .await
        .unwrap_err();

    assert!(matches!(err, PublishError::Transport(_)));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_sends_strategy_id() {
    let (addr, requests) = start_endpoint(StatusCode::NO_CONTENT, "").await;

    publisher(addr, AuthConfig::api_key("key", "secret"))
        .delete_signals(StrategyId::new(3145225415244741).unwrap())
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].body, json!({"strategy_id": 3145225415244741u64}));
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer key.secret"
    );
}

#[tokio::test]
async fn test_delete_rejection() {
    let (addr, _requests) = start_endpoint(StatusCode::NOT_FOUND, "no such strategy").await;

    let err = publisher(addr, AuthConfig::None)
        .delete_signals(StrategyId::new(99).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
}
