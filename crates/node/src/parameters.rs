use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::connector_core::error::ConnectorError;
use crate::connector_types::{
    ChatOptions, LocatorMode, ModelSelector, RawMetadataInput, SchemaVersion,
};

/// Per-node parameter bag, as delivered by the host for one item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeParameters {
    pub json_metadata: RawMetadataInput,
    /// Raw model parameter; its shape depends on the node schema version
    /// and is decoded by [`decode_model_selector`].
    pub model: JsonValue,
    pub options: ChatOptions,
}

/// Decode the model parameter into its versioned selector. This is the only
/// place the schema-version branch lives; downstream code consumes the
/// selector without re-checking versions.
pub fn decode_model_selector(
    value: &JsonValue,
    version: SchemaVersion,
) -> Result<ModelSelector, ConnectorError> {
    if version.supports_model_locator() {
        let locator = value.as_object().ok_or_else(|| {
            ConnectorError::invalid_parameter(format!(
                "model parameter must be a locator object at schema {version}"
            ))
        })?;
        let mode = match locator.get("mode").and_then(JsonValue::as_str) {
            Some("list") => LocatorMode::List,
            Some("id") => LocatorMode::Id,
            other => {
                return Err(ConnectorError::invalid_parameter(format!(
                    "unknown model locator mode: {other:?}"
                )))
            }
        };
        let value = locator
            .get("value")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| {
                ConnectorError::invalid_parameter("model locator is missing a string value")
            })?;
        Ok(ModelSelector::Locator {
            mode,
            value: value.to_string(),
        })
    } else {
        value
            .as_str()
            .map(|name| ModelSelector::Name(name.to_string()))
            .ok_or_else(|| {
                ConnectorError::invalid_parameter(format!(
                    "model parameter must be a string at schema {version}"
                ))
            })
    }
}
