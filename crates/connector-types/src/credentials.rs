use std::fmt;

use serde::Deserialize;

/// Hard default for the chat API when neither the node options nor the
/// credential carry an override.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Credentials resolved by the host's credential store.
///
/// Read-only per invocation; the connector never mutates or persists them.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credentials {
    /// API key, sent as a bearer token. Required.
    pub api_key: String,
    /// Optional organization routed via the `OpenAI-Organization` header.
    pub organization_id: Option<String>,
    /// Base URL stored with the credential. Defaults to the OpenAI API.
    pub url: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            organization_id: None,
            url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Headers for direct calls under this credential (model discovery,
    /// credential verification). Keys are lowercased.
    pub fn authorization_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(
            "authorization".to_string(),
            if self.api_key.to_lowercase().starts_with("bearer ") {
                self.api_key.clone()
            } else {
                format!("Bearer {}", self.api_key)
            },
        )];
        if let Some(org) = self.organization_id.as_deref() {
            if !org.is_empty() {
                headers.push(("openai-organization".to_string(), org.to_string()));
            }
        }
        headers
    }
}

// The key is a secret; keep it out of Debug output and logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("organization_id", &self.organization_id)
            .field("url", &self.url)
            .finish()
    }
}
