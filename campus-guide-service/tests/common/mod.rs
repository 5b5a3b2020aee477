#![allow(dead_code)]

use campus_guide_service::config::CampusGuideConfig;
use campus_guide_service::services::providers::TextProvider;
use campus_guide_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-1.5-flash";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

/// Service configuration pointing the Gemini client at `api_base`.
pub fn test_config(api_base: &str) -> CampusGuideConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("GOOGLE_API_KEY", TEST_API_KEY.to_string()),
        ("GENAI_TEXT_MODEL", TEST_MODEL.to_string()),
        ("GEMINI_API_BASE", api_base.to_string()),
        ("GENAI_REQUEST_TIMEOUT_SECS", "5".to_string()),
    ]);

    // Port 0 = random port for testing
    CampusGuideConfig::from_lookup(CoreConfig { port: 0 }, |key| vars.get(key).cloned())
        .expect("Failed to build test configuration")
}

impl TestApp {
    /// Spawn the service backed by the given provider.
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config("http://unused.invalid"), provider)
            .await
            .expect("Failed to build test application");
        Self::launch(app).await
    }

    /// Spawn the service with the real Gemini client against `api_base`.
    pub async fn spawn_with_gemini(api_base: &str) -> Self {
        let app = Application::build(test_config(api_base))
            .await
            .expect("Failed to build test application");
        Self::launch(app).await
    }

    async fn launch(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        // Wait for HTTP server to be ready by polling health endpoint
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn ask(&self, path: &str, query: &str) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await
            .expect("Failed to send request")
    }
}
