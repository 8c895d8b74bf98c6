pub mod validate;

use crate::{
    Result,
    cache::{CacheKey, InferenceCache},
    engine::{InferenceEngine, Label},
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{info, warn};

/// Validates inference requests, forwards them to the engine and memoizes
/// content-addressed results.
///
/// The cache gives no at-most-once guarantee: identical requests that miss at
/// the same time each reach the engine, and the last result written is kept.
#[derive(Clone)]
pub struct InferenceGateway {
    engine: Arc<dyn InferenceEngine>,
    cache: Arc<InferenceCache>,
    cache_enabled: Arc<AtomicBool>,
}

impl InferenceGateway {
    pub fn new(engine: Arc<dyn InferenceEngine>, cache: Arc<InferenceCache>) -> Self {
        Self {
            engine,
            cache,
            cache_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn with_cache_enabled(self, enabled: bool) -> Self {
        self.set_cache_enabled(enabled);
        self
    }

    pub fn set_cache_enabled(&self, enabled: bool) {
        self.cache_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled.load(Ordering::Relaxed)
    }

    pub fn cache(&self) -> &Arc<InferenceCache> {
        &self.cache
    }

    /// Infer with a model and input that the engine already knows by hash. Never cached.
    pub async fn infer_by_hash(&self, model: &str, input: &str) -> Result<Label> {
        validate::model(model)?;
        validate::input_ref(input)?;

        info!(model_hash = model, input_hash = input, "Infer task");
        match self.engine.infer_by_reference(model, input).await {
            Ok(label) => {
                info!(result = %label, "Infer succeeded");
                Ok(label)
            }
            Err(e) => {
                warn!(error = %e, "Infer failed");
                Err(e)
            }
        }
    }

    /// Infer over raw input bytes, serving repeated (model, input) pairs from the cache.
    pub async fn infer_by_content(&self, model: &str, input: &[u8]) -> Result<Label> {
        validate::model(model)?;

        info!(model_hash = model, input_len = input.len(), "Infer work");
        let cache_enabled = self.cache_enabled();
        let cache_key = CacheKey::new(model, input);

        // A hit is served before the length check, so a cached empty input still answers
        if cache_enabled {
            if let Some(label) = self.cache.get(&cache_key) {
                info!(cache_key = %cache_key, label = %label, "Infer succeeded via cache");
                return Ok(label);
            }
        }

        if let Err(e) = validate::input_bytes(input) {
            warn!(error = %e, "Input content state invalid");
            return Err(e);
        }

        let label = match self.engine.infer_by_content(model, input).await {
            Ok(label) => label,
            Err(e) => {
                warn!(error = %e, "Infer failed");
                return Err(e);
            }
        };

        info!(result = %label, "Infer succeeded");
        if cache_enabled {
            self.cache.insert(cache_key, label.clone());
        }

        Ok(label)
    }
}
