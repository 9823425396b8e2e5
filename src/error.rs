use serde::Serialize;
use thiserror::Error;

/// Startup failures. Fatal: the process reports these and exits before any
/// command is registered against a transport.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "PAPIERKRAM_API_TOKEN is not set.\n\n\
         Set the environment variable PAPIERKRAM_API_TOKEN to your API token.\n\
         The token is found in Papierkram under Settings > API."
    )]
    MissingToken,
    #[error("Invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Failures of a single HTTP call made by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success status. `body` is the response text, verbatim.
    #[error("Papierkram API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid request URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Failed to decode JSON response: {message}")]
    Decode { message: String },
    #[error("Failed to encode request body: {message}")]
    Encode { message: String },
}

impl ClientError {
    /// HTTP status carried by the failure, if the remote service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::InvalidUrl { .. }
            | ClientError::Decode { .. }
            | ClientError::Encode { .. } => None,
        }
    }
}

/// Structured error type for command invocation. Surfaces can match on the
/// code to decide how to report (protocol error vs. failed tool result).
#[derive(Debug, Clone, Serialize, Error)]
#[serde(tag = "code", content = "detail")]
pub enum AppError {
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },
    #[error("Invalid parameters for {command}: {message}")]
    Validation { command: String, message: String },
    #[error("{message}")]
    Remote {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
    },
}

impl AppError {
    /// True for failures detected before any network call was made.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, AppError::UnknownCommand { .. } | AppError::Validation { .. })
    }
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        AppError::Remote {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

/// Allow converting AppError to String for the text-only surfaces.
impl From<AppError> for String {
    fn from(e: AppError) -> String {
        e.to_string()
    }
}
