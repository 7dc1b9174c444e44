use thiserror::Error;

/// Main error type for backend operations
#[derive(Error, Debug)]
pub enum BackendError {
    /// Requested model name or alias is not in the registry
    #[error("Unknown model or alias: {name}")]
    UnknownModel { name: String },

    /// Non-success HTTP reply from the chat service
    #[error("Transport error: status {status}: {body}")]
    Transport { status: u16, body: String },

    /// Network-level failures (connection refused, timeout, DNS)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reply body that could not be parsed as JSON
    #[error("Malformed response: {message}")]
    MalformedResponse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BackendError {
    /// Create an unknown-model error
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }

    /// Create a transport error from a status code and raw body
    pub fn transport(status: u16, body: impl Into<String>) -> Self {
        Self::Transport {
            status,
            body: body.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a malformed-response error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed-response error with source
    pub fn malformed_response_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for failures of the request/reply round trip, as opposed to
    /// construction-time misconfiguration.
    pub fn is_call_failure(&self) -> bool {
        matches!(
            self,
            BackendError::Transport { .. }
                | BackendError::Network { .. }
                | BackendError::MalformedResponse { .. }
        )
    }
}

/// Convert from reqwest errors
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::network_with_source("Request timed out", err)
        } else if err.is_connect() {
            BackendError::network_with_source("Connection failed", err)
        } else {
            BackendError::network_with_source("HTTP request failed", err)
        }
    }
}

/// Convert from serde_json errors
impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::malformed_response_with_source("JSON parsing failed", err)
    }
}
