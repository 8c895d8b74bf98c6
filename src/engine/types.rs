use crate::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque result bytes produced by the inference engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(Vec<u8>);

impl Label {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        hex_bytes::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        hex_bytes::deserialize(deserializer).map(Self)
    }
}

/// Lowercase hex with a `0x` prefix.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Accepts hex with or without a `0x` prefix. `""` and `"0x"` decode to no bytes.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    Ok(hex::decode(digits)?)
}

/// Serde adapter for byte fields carried as hex strings.
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_hex(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::decode_hex(&s).map_err(D::Error::custom)
    }
}

/// Body sent to the engine for by-reference inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceInferRequest {
    pub model: String,
    pub input: String,
}

/// Body sent to the engine for by-content inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentInferRequest {
    pub model: String,
    #[serde(with = "hex_bytes")]
    pub input: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineInferResponse {
    pub label: Label,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineErrorResponse {
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_accepts_prefixed_and_bare() {
        assert_eq!(decode_hex("0x0102").unwrap(), vec![1, 2]);
        assert_eq!(decode_hex("0X0a").unwrap(), vec![10]);
        assert_eq!(decode_hex("ff").unwrap(), vec![255]);
    }

    #[test]
    fn decode_empty_is_zero_bytes() {
        assert!(decode_hex("").unwrap().is_empty());
        assert!(decode_hex("0x").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_odd_and_non_hex() {
        assert!(decode_hex("0x123").is_err());
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn label_serializes_as_hex() {
        let label = Label::new(b"ok".to_vec());
        assert_eq!(serde_json::to_value(&label).unwrap(), json!("0x6f6b"));
        assert_eq!(label.to_string(), "0x6f6b");
    }

    #[test]
    fn content_request_uses_hex_input() {
        let req = ContentInferRequest {
            model: "m1".to_string(),
            input: vec![1, 2],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"model": "m1", "input": "0x0102"})
        );
    }
}
