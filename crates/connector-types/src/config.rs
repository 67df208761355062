use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::connector_types::options::ReasoningEffort;

/// The resolved request configuration handed to the downstream chat-model
/// client. Serializes to the client's constructor-config shape: camelCase
/// config keys, snake_case kwargs keys, unset optionals omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedChatConfig {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    #[serde(rename = "organizationId", skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    pub model: String,
    /// Final metadata bag; always present, possibly empty. Also exposed
    /// unmodified to the observability sink.
    pub metadata: JsonMap<String, JsonValue>,
    /// `{"metadata": …}` envelope for gateways that read the top-level
    /// field. Absent when there is no metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_body: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(rename = "topP", skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(rename = "frequencyPenalty", skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(rename = "presencePenalty", skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(rename = "maxTokens", skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Milliseconds.
    pub timeout: u64,
    #[serde(rename = "maxRetries")]
    pub max_retries: u32,
    #[serde(rename = "modelKwargs")]
    pub model_kwargs: ModelKwargs,
}

/// Options the chat client does not model directly; forwarded verbatim in
/// the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelKwargs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
    /// Duplicate of the top-level envelope for gateways that only read it
    /// from the request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_body: Option<JsonValue>,
}

impl ModelKwargs {
    pub fn is_empty(&self) -> bool {
        self.response_format.is_none()
            && self.reasoning_effort.is_none()
            && self.extra_body.is_none()
    }
}

/// Advisory conditions absorbed during resolution. Never fatal; surfaced so
/// an operator can diagnose degraded input after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ResolveWarning {
    /// A bounded numeric option was outside its range and was clamped.
    OptionClamped {
        setting: String,
        requested: f64,
        clamped: f64,
    },
    /// Custom metadata text did not parse as a JSON object; the original
    /// text was preserved under the reserved raw key.
    MetadataParseFallback { preserved_bytes: usize },
}
