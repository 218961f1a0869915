use lyrics_service::config::{GoogleConfig, LyricsConfig, ModelConfig};
use lyrics_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
}

/// Configuration routing generation to the in-process mock provider.
pub fn mock_provider_config() -> LyricsConfig {
    LyricsConfig {
        common: CoreConfig { port: 0 },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
            api_base: "http://127.0.0.1:0".to_string(),
            enabled: false,
        },
        models: ModelConfig {
            text_model: "gemini-1.5-flash".to_string(),
        },
    }
}

/// Configuration pointing the Gemini provider at a stub server.
#[allow(dead_code)]
pub fn gemini_config(api_base: &str) -> LyricsConfig {
    LyricsConfig {
        common: CoreConfig { port: 0 },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
            api_base: api_base.to_string(),
            enabled: true,
        },
        models: ModelConfig {
            text_model: "gemini-1.5-flash".to_string(),
        },
    }
}

impl TestApp {
    pub async fn spawn(config: LyricsConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the HTTP server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}
