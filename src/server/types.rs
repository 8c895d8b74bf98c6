use crate::engine::hex_bytes;
use serde::{Deserialize, Serialize};

/// Inference over a model and an input both addressed by hash.
#[derive(Debug, Deserialize)]
pub struct HashInferenceRequest {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub input: String,
}

/// Inference over raw input bytes, sent as hex.
#[derive(Debug, Deserialize)]
pub struct ContentInferenceRequest {
    #[serde(default)]
    pub model: String,
    #[serde(default, with = "hex_bytes")]
    pub input: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub info: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    pub enabled: bool,
    pub entries: usize,
}
