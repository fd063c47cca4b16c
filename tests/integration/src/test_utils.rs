//! Test utilities for service integration tests

use calldata_api::{build_router, AppState};
use calldata_core::ServiceConfig;
use std::net::SocketAddr;
use std::sync::{Arc, Once};
use tokio::net::TcpListener;

static TRACING: Once = Once::new();

/// Install a test subscriber once per process; output is captured by libtest.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

/// A service instance bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: Arc<AppState>,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Start the service with default configuration.
    pub async fn start() -> Self {
        Self::start_with(ServiceConfig::default()).await
    }

    pub async fn start_with(config: ServiceConfig) -> Self {
        init_tracing();

        let state = Arc::new(AppState::new(config));
        let app = build_router(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST `{"text": text}` to the create endpoint.
    pub async fn create(&self, text: &str) -> reqwest::Response {
        self.client
            .post(self.url("/transactions/"))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .unwrap()
    }

    pub async fn list(&self) -> Vec<serde_json::Value> {
        self.client
            .get(self.url("/transactions/"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}
