//! Mock Scryfall API for testing the CLI over real HTTP.
//!
//! An axum server on an ephemeral localhost port answers every request with
//! the response configured for its path and records the request target so
//! tests can check which endpoint and query the CLI built.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header;
use axum::response::IntoResponse;
use tokio::sync::oneshot;

const NO_SUCH_ENDPOINT: &str =
    r#"{"object":"error","code":"not_found","status":404,"details":"No such endpoint"}"#;

/// Canned HTTP response for one path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: String,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid HTTP status"),
            body: body.into(),
        }
    }
}

/// Request target as sent by the client, e.g. `/cards/named?fuzzy=opt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub target: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, query)| query)
    }
}

#[derive(Default)]
struct MockState {
    responses: HashMap<String, MockResponse>,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<MockState>>;

pub struct MockScryfall {
    base_url: String,
    state: SharedState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockScryfall {
    /// Starts the server on its own runtime thread and waits until it is
    /// listening.
    pub fn start() -> Self {
        let state = SharedState::default();
        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));

        let (ready_tx, ready_rx) = std::sync::mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        thread::Builder::new()
            .name("mock-scryfall".to_string())
            .spawn(move || {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("Failed to create tokio runtime");

                runtime.block_on(async move {
                    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                        .await
                        .expect("Failed to bind mock Scryfall");
                    let addr = listener.local_addr().expect("local addr");
                    let _ = ready_tx.send(addr);

                    let _ = axum::serve(listener, app)
                        .with_graceful_shutdown(async move {
                            let _ = shutdown_rx.await;
                        })
                        .await;
                });
            })
            .expect("Failed to spawn mock Scryfall thread");

        let addr = ready_rx.recv().expect("mock Scryfall should start");
        Self {
            base_url: format!("http://{addr}"),
            state,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_response(&self, path: &str, response: MockResponse) {
        self.state
            .lock()
            .expect("mock state")
            .responses
            .insert(path.to_string(), response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().expect("mock state").requests.clone()
    }
}

impl Drop for MockScryfall {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn respond(State(state): State<SharedState>, uri: Uri) -> impl IntoResponse {
    let target = uri
        .path_and_query()
        .map(|target| target.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let request = RecordedRequest { target };

    let response = {
        let mut state = state.lock().expect("mock state");
        state.requests.push(request.clone());
        state
            .responses
            .get(request.path())
            .cloned()
            .unwrap_or_else(|| MockResponse::status(404, NO_SUCH_ENDPOINT))
    };

    (
        response.status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        response.body,
    )
}
