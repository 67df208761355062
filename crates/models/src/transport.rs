use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::connector_core::error::TransportError;

#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Overall request timeout.
    pub request_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Minimal HTTP seam for discovery calls; tests inject their own.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request and return the parsed JSON body.
    async fn get_json(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<JsonValue, TransportError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    cfg: TransportConfig,
}

impl ReqwestTransport {
    pub fn try_new(cfg: &TransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(cfg.connect_timeout)
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|err| TransportError::Network(format!("client build failed: {err}")))?;
        Ok(Self {
            client,
            cfg: cfg.clone(),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<JsonValue, TransportError> {
        let mut request = self.client.get(url);
        for (key, value) in headers {
            request = request.header(key, value);
        }
        let response = request.send().await.map_err(|err| {
            if err.is_connect() {
                TransportError::ConnectTimeout(self.cfg.connect_timeout)
            } else {
                TransportError::Network(err.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::BodyDecode(err.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(TransportError::HttpStatus { status, body });
        }
        serde_json::from_str(&body).map_err(|err| TransportError::BodyDecode(err.to_string()))
    }
}
