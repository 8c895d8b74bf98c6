use super::MockEngine;
use infer_gateway::{cache::InferenceCache, gateway::InferenceGateway};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Build a gateway over the given mock engine with a fresh cache
pub fn create_test_gateway(engine: MockEngine) -> (InferenceGateway, Arc<MockEngine>) {
    let engine = Arc::new(engine);
    let gateway = InferenceGateway::new(engine.clone(), Arc::new(InferenceCache::new()));
    (gateway, engine)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8181
  logs:
    level: "debug"

engine:
  base_url: "http://localhost:9999/"
  timeout_secs: 30

cache:
  disabled: true
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
