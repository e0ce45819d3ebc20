use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{Backend, BackendError, GenerationParams};
use crate::protocol::GenerationPayload;

/// Hugging Face backend configuration.
pub struct HuggingFaceConfig {
    pub base_url: Option<String>,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

/// Hugging Face Inference API backend: hosted text-generation models behind
/// `POST /models/{model}` with bearer auth.
pub struct HuggingFace {
    base_url: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HuggingFace {
    pub fn new(config: HuggingFaceConfig, client: reqwest::Client) -> Self {
        Self {
            base_url: config
                .base_url
                .unwrap_or_else(|| "https://api-inference.huggingface.co".into()),
            api_key: config.api_key,
            model: config.model,
            timeout_secs: config.timeout_secs,
            client,
        }
    }

    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl Backend for HuggingFace {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationPayload, BackendError> {
        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": params.max_new_tokens,
                "temperature": params.temperature,
            },
        });

        let request = self
            .client
            .post(self.model_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send();

        let response = tokio::time::timeout(Duration::from_secs(self.timeout_secs), request)
            .await
            .map_err(|_| BackendError::Timeout(self.timeout_secs))?
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<GenerationPayload>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}
