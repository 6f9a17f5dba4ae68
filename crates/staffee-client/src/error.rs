use reqwest::StatusCode;
use serde::Deserialize;

use staffee_core::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Backend returned an unreadable response: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    Config(String),
}

/// Error body shapes the backend is known to send.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ClientError {
    /// Builds a status error from a non-success response body, falling back
    /// to the canonical reason phrase.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<BackendErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Backend request failed")
                    .to_string()
            });

        ClientError::Status { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Backend 4xx answers keep their status and message; anything else is
    /// reported as a bad gateway.
    pub fn into_app_error(self) -> AppError {
        match self {
            ClientError::Status { status, message } if status.is_client_error() => {
                AppError::new(status, anyhow::anyhow!(message))
            }
            other => AppError::bad_gateway(other),
        }
    }
}
