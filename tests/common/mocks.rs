use async_trait::async_trait;
use infer_gateway::{
    Error, Result,
    engine::{InferenceEngine, Label},
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A call the mock engine received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Reference { model: String, input: String },
    Content { model: String, input: Vec<u8> },
}

/// Mock inference engine that records every call
#[derive(Debug)]
pub struct MockEngine {
    pub calls: Arc<Mutex<Vec<EngineCall>>>,
    pub label: Label,
    pub error: Option<String>,
    pub delay: Option<Duration>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            label: Label::new(b"ok".to_vec()),
            error: None,
            delay: None,
        }
    }

    pub fn with_label(mut self, label: &[u8]) -> Self {
        self.label = Label::new(label.to_vec());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: EngineCall) -> Result<Label> {
        self.calls.lock().unwrap().push(call);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref error) = self.error {
            return Err(Error::engine(error.clone()));
        }

        Ok(self.label.clone())
    }
}

#[async_trait]
impl InferenceEngine for MockEngine {
    async fn infer_by_reference(&self, model: &str, input: &str) -> Result<Label> {
        self.answer(EngineCall::Reference {
            model: model.to_string(),
            input: input.to_string(),
        })
        .await
    }

    async fn infer_by_content(&self, model: &str, input: &[u8]) -> Result<Label> {
        self.answer(EngineCall::Content {
            model: model.to_string(),
            input: input.to_vec(),
        })
        .await
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}
