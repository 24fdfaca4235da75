//! Fake car-data API server and canned in-process source for harnesses.
//!
//! [`FakeCarApi`] spins up a minimal `axum` server on a random TCP port
//! serving the three endpoints, so the real hyper-backed [`CarApi`] client
//! can be pointed at it. [`StaticSource`] skips HTTP entirely and hands the
//! pipeline canned payloads; most pipeline tests use it.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use carlot_sources::client::Payload;
use carlot_sources::{CarDataSource, SourceError};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

// ---------------------------------------------------------------------------
// In-process canned source
// ---------------------------------------------------------------------------

/// Canned payloads for the three record sets, with optional per-endpoint
/// failure injection.
#[derive(Debug, Clone)]
pub struct StaticSource {
    pub models: Payload,
    pub bodies: Payload,
    pub engines: Payload,
    /// Name of the endpoint whose fetch should reject (`"models"`,
    /// `"bodies"`, or `"engines"`).
    pub fail: Option<&'static str>,
}

impl StaticSource {
    pub fn new(models: Value, bodies: Value, engines: Value) -> Self {
        Self {
            models: Payload::Json(models),
            bodies: Payload::Json(bodies),
            engines: Payload::Json(engines),
            fail: None,
        }
    }

    fn fetch(&self, endpoint: &'static str, payload: &Payload) -> Result<Payload, SourceError> {
        if self.fail == Some(endpoint) {
            return Err(SourceError::Io(std::io::Error::other(format!(
                "{endpoint} endpoint unreachable"
            ))));
        }
        Ok(payload.clone())
    }
}

impl CarDataSource for StaticSource {
    async fn models(&self) -> Result<Payload, SourceError> {
        self.fetch("models", &self.models)
    }

    async fn bodies(&self) -> Result<Payload, SourceError> {
        self.fetch("bodies", &self.bodies)
    }

    async fn engines(&self) -> Result<Payload, SourceError> {
        self.fetch("engines", &self.engines)
    }
}

// ---------------------------------------------------------------------------
// HTTP fake
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ApiState {
    /// Per-endpoint response: status code plus raw body text.
    responses: HashMap<&'static str, (StatusCode, String)>,
    /// The `x-rapidapi-key` header seen on the most recent request.
    last_key_header: Option<String>,
}

/// Handle to the running fake car-data API server.
pub struct FakeCarApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeCarApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/api/models", get(serve_models))
            .route("/api/bodies", get(serve_bodies))
            .route("/api/engines", get(serve_engines))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve a JSON value from an endpoint.
    pub async fn respond_json(&self, endpoint: &'static str, value: Value) {
        self.respond_raw(endpoint, StatusCode::OK, value.to_string())
            .await;
    }

    /// Serve an arbitrary status and body text from an endpoint.
    pub async fn respond_raw(&self, endpoint: &'static str, status: StatusCode, body: String) {
        let mut state = self.state.lock().await;
        state.responses.insert(endpoint, (status, body));
    }

    /// The `x-rapidapi-key` header observed on the most recent request.
    pub async fn last_key_header(&self) -> Option<String> {
        self.state.lock().await.last_key_header.clone()
    }
}

async fn serve_models(
    State(state): State<Arc<Mutex<ApiState>>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    serve(state, headers, "models").await
}

async fn serve_bodies(
    State(state): State<Arc<Mutex<ApiState>>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    serve(state, headers, "bodies").await
}

async fn serve_engines(
    State(state): State<Arc<Mutex<ApiState>>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    serve(state, headers, "engines").await
}

async fn serve(
    state: Arc<Mutex<ApiState>>,
    headers: HeaderMap,
    endpoint: &'static str,
) -> (StatusCode, String) {
    let mut state = state.lock().await;
    state.last_key_header = headers
        .get("x-rapidapi-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    state
        .responses
        .get(endpoint)
        .cloned()
        .unwrap_or((StatusCode::OK, "[]".to_string()))
}
