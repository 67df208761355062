use serde::{Deserialize, Deserializer, Serialize};

pub const FREQUENCY_PENALTY_RANGE: (f64, f64) = (-2.0, 2.0);
pub const PRESENCE_PENALTY_RANGE: (f64, f64) = (-2.0, 2.0);
pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 2.0);
pub const TOP_P_RANGE: (f64, f64) = (0.0, 1.0);
pub const MAX_TOKENS_CEILING: u32 = 32_768;

pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// The node's option bag. Every field is independently optional; absent
/// fields take resolver defaults, explicit values (including zero) are
/// respected as written.
///
/// Field names follow the host parameter names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatOptions {
    #[serde(rename = "baseURL")]
    pub base_url: Option<String>,
    pub frequency_penalty: Option<f64>,
    /// The host UI uses -1 as an "unlimited" sentinel; negative values
    /// decode to unset so the sentinel never reaches the wire.
    #[serde(deserialize_with = "max_tokens_from_host")]
    pub max_tokens: Option<u32>,
    pub max_retries: Option<u32>,
    /// Request timeout in milliseconds.
    pub timeout: Option<u64>,
    pub presence_penalty: Option<f64>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub response_format: Option<ResponseFormat>,
    pub reasoning_effort: Option<ReasoningEffort>,
}

fn max_tokens_from_host<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| u32::try_from(v).ok()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Text,
    JsonObject,
}

impl ResponseFormat {
    pub fn is_text(&self) -> bool {
        matches!(self, ResponseFormat::Text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    #[default]
    Medium,
    High,
}
