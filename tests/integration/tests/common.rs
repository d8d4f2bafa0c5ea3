//! Common test utilities and fixtures.

use std::time::Duration;

use reqwest::Client;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::sleep;

use kc_theme_server::{Server, ServerConfig};

/// Test environment running a theme server on a random port.
pub struct TestEnv {
    /// Base URL of the running server.
    pub base_url: String,
    /// HTTP client for testing.
    pub client: Client,
    /// Server shutdown signal.
    _shutdown_tx: oneshot::Sender<()>,
}

impl TestEnv {
    /// Starts a server with the test configuration.
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_config(ServerConfig::for_testing()).await
    }

    /// Starts a server with the given configuration.
    pub async fn with_config(config: ServerConfig) -> anyhow::Result<Self> {
        // Initialize tracing for tests
        let _ = tracing_subscriber::fmt()
            .with_env_filter("kc_theme_server=debug,kc_theme=debug")
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        // Create shutdown channel
        let (_shutdown_tx, shutdown_rx) = oneshot::channel();

        // Start server
        let server = Server::new(config)?;
        tokio::spawn(async move {
            tokio::select! {
                result = server.serve(listener) => {
                    if let Err(e) = result {
                        tracing::error!("Server error: {}", e);
                    }
                }
                _ = shutdown_rx => {
                    tracing::info!("Server shutdown requested");
                }
            }
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        wait_for_server(&client, &base_url).await?;

        Ok(Self {
            base_url,
            client,
            _shutdown_tx,
        })
    }

    /// Returns the render URL for a realm.
    pub fn render_url(&self, realm: &str) -> String {
        format!("{}/realms/{}/login-actions/render", self.base_url, realm)
    }

    /// Returns the preview URL of a page story.
    pub fn preview_url(&self, page_id: &str, story: &str) -> String {
        format!("{}/preview/{}?story={}", self.base_url, page_id, story)
    }

    /// Posts a context and returns the status and body.
    pub async fn render(
        &self,
        realm: &str,
        context: &serde_json::Value,
    ) -> anyhow::Result<(reqwest::StatusCode, String)> {
        let response = self
            .client
            .post(self.render_url(realm))
            .json(context)
            .send()
            .await?;
        let status = response.status();
        Ok((status, response.text().await?))
    }
}

/// Waits for the server to be ready.
async fn wait_for_server(client: &Client, base_url: &str) -> anyhow::Result<()> {
    let health_url = format!("{}/health", base_url);
    let max_attempts = 50;

    for attempt in 1..=max_attempts {
        match client.get(&health_url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Server ready after {} attempts", attempt);
                return Ok(());
            }
            _ => sleep(Duration::from_millis(100)).await,
        }
    }

    anyhow::bail!("Server did not become ready at {}", base_url)
}
