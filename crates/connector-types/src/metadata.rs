use serde::Deserialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Per-invocation metadata inputs from the node's `jsonMetadata` collection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMetadataInput {
    /// Trace-grouping identifier.
    pub session_id: Option<String>,
    /// Trace-attribution identifier.
    pub user_id: Option<String>,
    /// Free-form structured metadata; the host may deliver it either as an
    /// already-structured object or as serialized text.
    pub custom_metadata: Option<CustomMetadata>,
}

impl RawMetadataInput {
    pub fn is_empty(&self) -> bool {
        self.session_id.is_none() && self.user_id.is_none() && self.custom_metadata.is_none()
    }
}

/// Custom metadata as it arrives from the host parameter bag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CustomMetadata {
    /// Already-structured mapping; used as-is, never re-parsed.
    Structured(JsonMap<String, JsonValue>),
    /// Serialized text; parsed with lossless fallback on failure.
    Text(String),
}
