use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("model is empty")]
    ModelEmpty,

    #[error("input is empty")]
    InputEmpty,

    #[error("input bytes length is zero")]
    InputBytesZeroLength,

    #[error("{0}")]
    Engine(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for request-shape failures that are reported before the engine is called.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ModelEmpty | Self::InputEmpty | Self::InputBytesZeroLength
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_classified() {
        assert!(Error::ModelEmpty.is_validation());
        assert!(Error::InputEmpty.is_validation());
        assert!(Error::InputBytesZeroLength.is_validation());
        assert!(!Error::engine("boom").is_validation());
        assert!(!Error::config("bad").is_validation());
    }

    #[test]
    fn engine_message_is_shown_unchanged() {
        assert_eq!(Error::engine("model not found").to_string(), "model not found");
    }
}
