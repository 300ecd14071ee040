//! In-process stub of the pyLoad HTTP API for integration tests.

use axum::Router;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const SESSION_COOKIE: &str = "session=abc123";

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub query: Option<String>,
    pub cookie: Option<String>,
}

#[derive(Clone, Default)]
pub struct StubState {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl StubState {
    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> Seen {
        self.seen().pop().expect("stub saw no request")
    }

    fn record(&self, uri: &Uri, headers: &HeaderMap) {
        let cookie = headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.seen.lock().unwrap().push(Seen {
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            cookie,
        });
    }
}

/// A running stub server.
pub struct Stub {
    pub base_url: String,
    pub state: StubState,
}

async fn login(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    state.record(&uri, &headers);
    let ok = form.get("username").map(String::as_str) == Some("pyload")
        && form.get("password").map(String::as_str) == Some("pyload");
    if ok {
        (
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
            axum::Json(json!(true)),
        )
            .into_response()
    } else {
        axum::Json(json!(false)).into_response()
    }
}

async fn get_queue(State(state): State<StubState>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    state.record(&uri, &headers);
    let authed = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        == Some(SESSION_COOKIE);
    if !authed {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }
    axum::Json(json!([
        {"pid": 1, "name": "Holiday", "folder": "Holiday", "password": "",
         "sizetotal": 4_194_304, "sizedone": 1_048_576, "linkstotal": 2, "linksdone": 1},
        {"pid": 2, "name": "Linux ISOs", "folder": "iso", "password": "",
         "sizetotal": 0, "sizedone": 0, "linkstotal": 0, "linksdone": 0}
    ]))
    .into_response()
}

/// Echo the request back so tests can inspect what went over the wire.
async fn echo(State(state): State<StubState>, uri: Uri, headers: HeaderMap) -> axum::Json<Value> {
    state.record(&uri, &headers);
    axum::Json(json!({"path": uri.path(), "query": uri.query()}))
}

async fn add_package(State(state): State<StubState>, uri: Uri, headers: HeaderMap) -> axum::Json<Value> {
    state.record(&uri, &headers);
    axum::Json(json!(42))
}

async fn status(State(state): State<StubState>, uri: Uri, headers: HeaderMap) -> axum::Json<Value> {
    state.record(&uri, &headers);
    axum::Json(json!({"pause": true, "active": 0, "queue": 3, "total": 3, "speed": 0.0,
                      "download": true, "reconnect": false, "captcha": false}))
}

async fn slow() -> axum::Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    axum::Json(Value::Null)
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "Traceback: KeyError 'pid'")
}

async fn not_json() -> &'static str {
    "<html>please log in</html>"
}

/// Start the stub on an ephemeral loopback port.
pub async fn spawn_stub() -> Stub {
    let state = StubState::default();
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/get_queue", get(get_queue))
        .route("/api/add_package", get(add_package))
        .route("/api/echo", get(echo))
        .route("/api/echo/:args", get(echo))
        .route("/api/set_config_value/:args", get(echo))
        .route("/json/status", get(status))
        .route("/api/slow", get(slow))
        .route("/api/broken", get(broken))
        .route("/api/not_json", get(not_json))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Stub {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// A loopback address nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
