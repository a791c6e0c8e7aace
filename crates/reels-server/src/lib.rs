//! HTTP surface for ResearchReels

mod cors;
mod health;
mod reels;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use reels_config::Config;
use reels_pipeline::ReelPipeline;
use tower_http::trace::TraceLayer;

pub use reels::GenerateReelsResponse;

/// Path of the reel generation endpoint
pub const GENERATE_REELS_PATH: &str = "/api/generate-reels";

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline or one of its providers cannot be
    /// built
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let pipeline = Arc::new(ReelPipeline::from_config(config)?);
        Ok(Self::with_pipeline(config, pipeline))
    }

    /// Build the server around an existing pipeline
    pub fn with_pipeline(config: &Config, pipeline: Arc<ReelPipeline>) -> Self {
        let mut app = Router::new().route(
            GENERATE_REELS_PATH,
            post(reels::generate_reels_handler).with_state(pipeline),
        );

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Self {
            router: app,
            listen_address: config.server.listen_address(),
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode, header};
    use indoc::indoc;
    use tower::ServiceExt;

    use super::*;

    const CONFIG: &str = indoc! {r#"
        [server]
        listen_address = "127.0.0.1:4100"

        [server.cors]
        origins = ["http://localhost:5173"]

        [llm.providers.local]
        type = "openai"
        api_key = "test"
        base_url = "http://127.0.0.1:9/v1"
        model = "test-model"

        [tts.providers.local]
        type = "openai_tts"
        api_key = "test"
        base_url = "http://127.0.0.1:9/v1"

        [imagegen.providers.local]
        type = "openai"
        api_key = "test"
        base_url = "http://127.0.0.1:9/v1"
    "#};

    fn router() -> Router {
        let config = Config::from_toml(CONFIG).unwrap();
        let server = Server::new(&config).unwrap();
        assert_eq!(server.listen_address(), "127.0.0.1:4100".parse().unwrap());
        server.into_router()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn generate(body: &'static str) -> Request<Body> {
        Request::post(GENERATE_REELS_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_served() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_topic_is_bad_request() {
        let response = router().oneshot(generate(r#"{"topic":""}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, serde_json::json!({ "error": "Topic is required" }));
    }

    #[tokio::test]
    async fn missing_topic_is_bad_request() {
        let response = router().oneshot(generate("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreadable_body_is_internal_error() {
        let response = router().oneshot(generate("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(body["details"].as_str().unwrap().contains("invalid request body"));
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri(GENERATE_REELS_PATH)
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }
}
