//! Test server wrapper that starts ResearchReels on a random port

use std::net::SocketAddr;

use reels_config::Config;
use reels_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config)?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// `POST /api/generate-reels` with a JSON body
    pub async fn generate_reels(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(reels_server::GENERATE_REELS_PATH))
            .json(body)
            .send()
            .await
            .expect("request reaches the test server")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
