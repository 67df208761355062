use std::time::Duration;

use thiserror::Error;

/// Fatal resolution failures. Anything else degrades gracefully into the
/// produced configuration (raw-fallback keys, clamped values) and is
/// reported as a [`ResolveWarning`](crate::types::ResolveWarning).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("resolved model name is empty")]
    EmptyModel,
    #[error("credentials are missing an API key")]
    MissingApiKey,
}

/// Connector-wide error taxonomy for the layers around the resolver.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl ConnectorError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        ConnectorError::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Errors raised by the HTTP transport used for model discovery.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http status {status}")]
    HttpStatus { status: u16, body: String },
    #[error("network: {0}")]
    Network(String),
    #[error("connect timeout after {0:?}")]
    ConnectTimeout(Duration),
    #[error("body decode error: {0}")]
    BodyDecode(String),
}

/// Map a transport failure to the connector taxonomy, surfacing upstream
/// HTTP statuses with their response body as the message.
pub fn map_transport_error(err: TransportError) -> ConnectorError {
    match err {
        TransportError::HttpStatus { status, body } => ConnectorError::Upstream {
            status,
            message: if body.is_empty() {
                format!("http status {status}")
            } else {
                body
            },
        },
        other => ConnectorError::Transport(other),
    }
}

#[cfg(test)]
mod tests {
    use super::{map_transport_error, ConnectorError, TransportError};

    #[test]
    fn http_status_maps_to_upstream_with_body() {
        let mapped = map_transport_error(TransportError::HttpStatus {
            status: 401,
            body: "{\"error\":\"invalid api key\"}".into(),
        });
        match mapped {
            ConnectorError::Upstream { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("invalid api key"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        let mapped = map_transport_error(TransportError::HttpStatus {
            status: 503,
            body: String::new(),
        });
        match mapped {
            ConnectorError::Upstream { message, .. } => assert_eq!(message, "http status 503"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn network_errors_stay_transport() {
        let mapped = map_transport_error(TransportError::Network("connection refused".into()));
        assert!(matches!(mapped, ConnectorError::Transport(_)));
    }
}
