use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use padron_client::dto::Credentials;
use padron_client::{Api, ClientConfig, Http, SharedToken};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Default)]
struct Captured {
    auth_headers: Mutex<Vec<Option<String>>>,
}

fn auth_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

async fn list_users(State(state): State<Arc<Captured>>, headers: HeaderMap) -> Json<Value> {
    state.auth_headers.lock().unwrap().push(auth_of(&headers));
    Json(json!({ "data": [] }))
}

fn echo_app(state: Arc<Captured>) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route(
            "/auth/login",
            post(|| async { Json(json!({ "access_token": "tok-1", "name": "Admin" })) }),
        )
        .with_state(state)
}

fn api_for(base_url: &str, token: &SharedToken) -> Api {
    let config = ClientConfig::new(base_url);
    Api::new(Http::new(&config, Arc::new(token.clone())))
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let state = Arc::new(Captured::default());
    let srv = TestServer::spawn(echo_app(state.clone())).await;

    let token = SharedToken::new();
    let api = api_for(&srv.base_url, &token);

    api.get_users().await.unwrap();

    assert_eq!(state.auth_headers.lock().unwrap().as_slice(), &[None]);
}

#[tokio::test]
async fn stored_token_is_sent_as_exact_bearer_header() {
    let state = Arc::new(Captured::default());
    let srv = TestServer::spawn(echo_app(state.clone())).await;

    let token = SharedToken::new();
    token.set(Some("tok-1".to_string()));
    let api = api_for(&srv.base_url, &token);

    api.get_users().await.unwrap();

    assert_eq!(
        state.auth_headers.lock().unwrap().as_slice(),
        &[Some("Bearer tok-1".to_string())]
    );
}

#[tokio::test]
async fn success_returns_only_the_body_payload() {
    let state = Arc::new(Captured::default());
    let srv = TestServer::spawn(echo_app(state)).await;

    let token = SharedToken::new();
    let api = api_for(&srv.base_url, &token);

    let session = api
        .login(&Credentials {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.access_token, "tok-1");
    assert_eq!(session.field("name"), Some(&json!("Admin")));
}

#[tokio::test]
async fn server_message_field_wins_in_normalization() {
    let app = Router::new().route(
        "/users",
        get(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "message": "datos inválidos",
                    "error": "validation",
                    "errors": { "dni": ["el dni debe tener 8 dígitos"] }
                })),
            )
                .into_response()
        }),
    );
    let srv = TestServer::spawn(app).await;

    let token = SharedToken::new();
    let api = api_for(&srv.base_url, &token);

    let err = api.get_users().await.unwrap_err();
    assert_eq!(err.message, "datos inválidos");
    assert_eq!(err.status_code, Some(422));
    assert_eq!(err.code, None);
    assert!(!err.success);
    assert_eq!(err.details, Some(json!({ "dni": ["el dni debe tener 8 dígitos"] })));
    assert_eq!(
        err.data.as_ref().and_then(|d| d.get("error")),
        Some(&json!("validation"))
    );
}

#[tokio::test]
async fn error_field_is_the_second_fallback() {
    let app = Router::new().route(
        "/users",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "unauthenticated" })),
            )
                .into_response()
        }),
    );
    let srv = TestServer::spawn(app).await;

    let token = SharedToken::new();
    let api = api_for(&srv.base_url, &token);

    let err = api.get_users().await.unwrap_err();
    assert_eq!(err.message, "unauthenticated");
    assert_eq!(err.status_code, Some(401));
    assert_eq!(err.details, None);
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_transport_text() {
    let app = Router::new().route(
        "/users",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
    );
    let srv = TestServer::spawn(app).await;

    let token = SharedToken::new();
    let api = api_for(&srv.base_url, &token);

    let err = api.get_users().await.unwrap_err();
    assert_eq!(err.message, "request failed with status 500");
    assert_eq!(err.status_code, Some(500));
    assert_eq!(err.data, None);
}

#[tokio::test]
async fn pure_network_failure_still_normalizes() {
    // Bind and immediately drop so the port is guaranteed dead.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let token = SharedToken::new();
    let api = api_for(&format!("http://{}", addr), &token);

    let err = api.get_users().await.unwrap_err();
    assert_eq!(err.status_code, None);
    assert!(err.code.is_some());
    assert!(!err.message.is_empty());
    assert!(!err.success);
}

#[tokio::test]
async fn slow_response_surfaces_as_a_normalized_timeout_error() {
    let app = Router::new().route(
        "/users",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "data": [] }))
        }),
    );
    let srv = TestServer::spawn(app).await;

    let config = ClientConfig::new(&srv.base_url).with_timeout(Duration::from_millis(100));
    let token = SharedToken::new();
    let api = Api::new(Http::new(&config, Arc::new(token.clone())));

    let err = api.get_users().await.unwrap_err();
    assert_eq!(err.code.as_deref(), Some("timeout"));
    assert_eq!(err.status_code, None);
    assert!(!err.success);
}

#[tokio::test]
async fn unexpected_success_body_is_a_decode_error_with_status() {
    let app = Router::new().route("/users", get(|| async { Json(json!({ "data": "not-a-list" })) }));
    let srv = TestServer::spawn(app).await;

    let token = SharedToken::new();
    let api = api_for(&srv.base_url, &token);

    let err = api.get_users().await.unwrap_err();
    assert_eq!(err.code.as_deref(), Some("decode"));
    assert_eq!(err.status_code, Some(200));
}
