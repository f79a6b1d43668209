use serde::Deserialize;
use thiserror::Error;

use crate::config::EXEC_NAME;

/// FastAPI error body, `detail` is either a message or a list of field errors.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(message) => message.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("Your session has expired. Please run `{} auth login` again", EXEC_NAME)]
    Unauthorized,
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
    #[error("Request timed out")]
    Timeout,
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
