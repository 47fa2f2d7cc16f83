//! Mock of the Keygen validate-key action, served from a background runtime so that
//! synchronous `assert_cmd` tests can point the binary at it.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use tokio::runtime::Runtime;

pub const ACCOUNT: &str = "test-account";
pub const VALID_BODY: &str = r#"{"meta":{"valid":true,"constant":"VALID"},"data":{"type":"foo","id":"abc-123"}}"#;
pub const NOT_FOUND_BODY: &str = r#"{"meta":{"valid":false,"constant":"NOT_FOUND"}}"#;

struct MockState {
    status: StatusCode,
    body: String,
    request_bodies: Mutex<Vec<String>>,
}

pub struct MockLicenseServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    // Keeps the server task alive for the lifetime of the mock
    _runtime: Runtime,
}

impl MockLicenseServer {
    pub fn start(status: StatusCode, body: &str) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to build mock server runtime");

        let state = Arc::new(MockState {
            status,
            body: body.to_string(),
            request_bodies: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/accounts/{account}/licenses/actions/validate-key", post(handle_validate))
            .with_state(state.clone());

        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no local address");
        runtime.spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            state,
            _runtime: runtime,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn request_bodies(&self) -> Vec<String> {
        self.state.request_bodies.lock().unwrap().clone()
    }

    /// `meta.key` of every request received so far.
    pub fn received_keys(&self) -> Vec<String> {
        self.request_bodies()
            .iter()
            .map(|body| {
                let value: serde_json::Value = serde_json::from_str(body).expect("Request body isn't JSON");
                value["meta"]["key"].as_str().expect("Request has no meta.key").to_string()
            })
            .collect()
    }
}

async fn handle_validate(
    State(state): State<Arc<MockState>>,
    Path(account): Path<String>,
    body: String,
) -> (StatusCode, String) {
    state.request_bodies.lock().unwrap().push(body);

    if account != ACCOUNT {
        return (
            StatusCode::NOT_FOUND,
            String::from(r#"{"errors":[{"title":"Not found","detail":"The requested account was not found"}]}"#),
        );
    }
    (state.status, state.body.clone())
}
