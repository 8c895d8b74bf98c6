use super::types::*;
use crate::{Error, Result, config::EngineConfig};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};

/// Capability of an external inference engine.
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Infer with a model and an input that were both registered with the engine beforehand.
    async fn infer_by_reference(&self, model: &str, input: &str) -> Result<Label>;

    /// Infer with a registered model over raw input bytes.
    async fn infer_by_content(&self, model: &str, input: &[u8]) -> Result<Label>;
}

/// Engine reached over HTTP.
pub struct RemoteEngine {
    client: Client,
    base_url: String,
}

impl RemoteEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_label(response: Response) -> Result<Label> {
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read engine error body ({}): {}", status, e);
                    String::new()
                }
            };
            // Engines report failures either as {"error": ".."} or plain text
            let message = serde_json::from_str::<EngineErrorResponse>(&body)
                .ok()
                .map(|e| e.error)
                .filter(|e| !e.is_empty())
                .unwrap_or(body);
            return Err(Error::engine(if message.is_empty() {
                format!("engine returned {}", status)
            } else {
                message
            }));
        }

        let parsed: EngineInferResponse = response
            .json()
            .await
            .map_err(|e| Error::engine(format!("invalid engine response: {}", e)))?;
        Ok(parsed.label)
    }
}

#[async_trait]
impl InferenceEngine for RemoteEngine {
    async fn infer_by_reference(&self, model: &str, input: &str) -> Result<Label> {
        debug!("Engine infer by reference: model={} input={}", model, input);

        let body = ReferenceInferRequest {
            model: model.to_string(),
            input: input.to_string(),
        };
        let response = self
            .client
            .post(format!("{}/infer/reference", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::engine(format!("engine unreachable: {}", e)))?;

        Self::read_label(response).await
    }

    async fn infer_by_content(&self, model: &str, input: &[u8]) -> Result<Label> {
        debug!(
            "Engine infer by content: model={} input_len={}",
            model,
            input.len()
        );

        let body = ContentInferRequest {
            model: model.to_string(),
            input: input.to_vec(),
        };
        let response = self
            .client
            .post(format!("{}/infer/content", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::engine(format!("engine unreachable: {}", e)))?;

        Self::read_label(response).await
    }
}
