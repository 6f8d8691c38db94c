use jsonrpsee::core::Error as RpcError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub enum SdkError {
    #[error("Invalid integer literal: {0}")]
    InvalidLiteral(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalServerError(String),
}

impl SdkError {
    /// Status code carried by an `HttpStatus` error
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SdkError::SerializationError(e.to_string())
        } else {
            SdkError::RequestError(e.to_string())
        }
    }
}

impl From<url::ParseError> for SdkError {
    fn from(e: url::ParseError) -> Self {
        SdkError::InvalidUrl(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for SdkError {
    fn from(e: toml::de::Error) -> Self {
        SdkError::ConfigError(e.to_string())
    }
}

impl From<std::io::Error> for SdkError {
    fn from(e: std::io::Error) -> Self {
        SdkError::InternalServerError(e.to_string())
    }
}

impl From<RpcError> for SdkError {
    fn from(e: RpcError) -> Self {
        SdkError::InternalServerError(e.to_string())
    }
}
