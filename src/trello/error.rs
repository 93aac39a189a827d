//! Trello client error types.
//!
//! Every failure the client can raise is one of these variants. The facade
//! never lets them escape: it converts them into structured tool payloads
//! using [`TrelloError::kind`] and the `Display` message.

use std::path::PathBuf;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Stable failure category reported alongside the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Authentication,
    NotFound,
    RateLimit,
    Api,
    Network,
    InvalidResponse,
    InvalidArgument,
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Authentication => "authentication",
            ErrorKind::NotFound => "not_found",
            ErrorKind::RateLimit => "rate_limit",
            ErrorKind::Api => "api",
            ErrorKind::Network => "network",
            ErrorKind::InvalidResponse => "invalid_response",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Io => "io",
        }
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum TrelloError {
    #[error("Trello API credentials not found: {message}")]
    #[diagnostic(
        code(trello_mcp::config::missing_credentials),
        help(
            "Set TRELLO_API_KEY and TRELLO_API_TOKEN in your environment,\nor create a .env file containing both values."
        )
    )]
    Configuration { message: String },

    #[error("Invalid Trello API credentials")]
    #[diagnostic(
        code(trello_mcp::api::unauthorized),
        help("Check that TRELLO_API_KEY and TRELLO_API_TOKEN are valid and not revoked.")
    )]
    Unauthorized { endpoint: String },

    #[error("Resource not found: {endpoint}")]
    #[diagnostic(code(trello_mcp::api::not_found))]
    NotFound { endpoint: String },

    #[error(
        "Trello API rate limit exceeded on {endpoint}. Reduce request frequency or use webhooks for frequent updates."
    )]
    #[diagnostic(code(trello_mcp::api::rate_limited))]
    RateLimited { endpoint: String },

    #[error("Trello API error: {status}")]
    #[diagnostic(code(trello_mcp::api::status))]
    Api { status: u16, endpoint: String },

    #[error("Network error: {source}")]
    #[diagnostic(
        code(trello_mcp::api::network),
        help("Check your network connection; requests time out after 30 seconds.")
    )]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from {endpoint}: {message}")]
    #[diagnostic(code(trello_mcp::api::invalid_response))]
    InvalidResponse { endpoint: String, message: String },

    #[error("Invalid identifier {segment:?}: ids cannot be empty, '.' or '..'")]
    #[diagnostic(code(trello_mcp::api::invalid_path))]
    InvalidPath { segment: String },

    #[error("File not found: {}", path.display())]
    #[diagnostic(code(trello_mcp::io::file_not_found))]
    FileNotFound { path: PathBuf },

    #[error("Failed to access file {}: {source}", path.display())]
    #[diagnostic(code(trello_mcp::io::failed))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TrelloError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrelloError::Configuration { .. } => ErrorKind::Configuration,
            TrelloError::Unauthorized { .. } => ErrorKind::Authentication,
            TrelloError::NotFound { .. } => ErrorKind::NotFound,
            TrelloError::RateLimited { .. } => ErrorKind::RateLimit,
            TrelloError::Api { .. } => ErrorKind::Api,
            TrelloError::Network { .. } => ErrorKind::Network,
            TrelloError::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            TrelloError::InvalidPath { .. } => ErrorKind::InvalidArgument,
            TrelloError::FileNotFound { .. } | TrelloError::Io { .. } => ErrorKind::Io,
        }
    }

    /// HTTP status carried by the failure, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TrelloError::Unauthorized { .. } => Some(401),
            TrelloError::NotFound { .. } => Some(404),
            TrelloError::RateLimited { .. } => Some(429),
            TrelloError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a non-success status for the given endpoint.
    pub(crate) fn from_status(status: u16, endpoint: &str) -> Self {
        let endpoint = endpoint.to_string();
        match status {
            401 => TrelloError::Unauthorized { endpoint },
            404 => TrelloError::NotFound { endpoint },
            429 => TrelloError::RateLimited { endpoint },
            _ => TrelloError::Api { status, endpoint },
        }
    }

    /// The request URL carries the credentials, so it is stripped first.
    pub(crate) fn from_transport(error: reqwest::Error, endpoint: &str) -> Self {
        let error = error.without_url();
        if error.is_decode() {
            TrelloError::InvalidResponse {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            }
        } else {
            TrelloError::Network {
                endpoint: endpoint.to_string(),
                source: error,
            }
        }
    }
}

pub type TrelloResult<T> = Result<T, TrelloError>;
