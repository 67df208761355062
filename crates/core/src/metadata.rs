use serde_json::{json, Map as JsonMap, Value as JsonValue};

use crate::connector_types::{CustomMetadata, RawMetadataInput};

/// Reserved key holding the original custom-metadata text when it could not
/// seed a JSON object. The text is preserved byte-for-byte so the operator
/// can diagnose malformed input without losing data.
pub const RAW_METADATA_KEY: &str = "_raw";

/// Final metadata bag for one invocation: always a well-formed object map,
/// never raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedMetadata {
    map: JsonMap<String, JsonValue>,
    raw_fallback: bool,
}

impl NormalizedMetadata {
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.map.get(key)
    }

    pub fn entries(&self) -> &JsonMap<String, JsonValue> {
        &self.map
    }

    pub fn into_entries(self) -> JsonMap<String, JsonValue> {
        self.map
    }

    /// Whether the raw-text fallback fired while normalizing.
    pub fn used_raw_fallback(&self) -> bool {
        self.raw_fallback
    }

    /// Byte length of the text preserved under [`RAW_METADATA_KEY`], when
    /// the fallback fired.
    pub fn raw_fallback_bytes(&self) -> Option<usize> {
        if !self.raw_fallback {
            return None;
        }
        self.map
            .get(RAW_METADATA_KEY)
            .and_then(JsonValue::as_str)
            .map(str::len)
    }

    /// Envelope for gateways that accept side-channel metadata in the
    /// request body. Absent when there is nothing to send; an empty
    /// envelope is never produced.
    pub fn extra_body(&self) -> Option<JsonValue> {
        if self.map.is_empty() {
            None
        } else {
            Some(json!({ "metadata": self.map }))
        }
    }
}

/// Merge the per-node metadata inputs into the final bag.
///
/// Custom metadata text is parsed with JSON semantics; text that does not
/// parse to an object is preserved under [`RAW_METADATA_KEY`] instead of
/// failing the call. `sessionId` and `userId` overlay same-named keys
/// afterwards, session first, last writer wins. Pure and infallible.
pub fn normalize(raw: &RawMetadataInput) -> NormalizedMetadata {
    let (mut map, raw_fallback) = match &raw.custom_metadata {
        None => (JsonMap::new(), false),
        Some(CustomMetadata::Structured(map)) => (map.clone(), false),
        Some(CustomMetadata::Text(text)) => base_from_text(text),
    };

    overlay(&mut map, "sessionId", raw.session_id.as_deref());
    overlay(&mut map, "userId", raw.user_id.as_deref());

    NormalizedMetadata { map, raw_fallback }
}

fn base_from_text(text: &str) -> (JsonMap<String, JsonValue>, bool) {
    if text.trim().is_empty() {
        return (JsonMap::new(), false);
    }
    match serde_json::from_str::<JsonValue>(text) {
        Ok(JsonValue::Object(map)) => (map, false),
        Ok(_) => {
            // Parsed, but a scalar or sequence cannot seed a key-value bag.
            tracing::warn!(
                bytes = text.len(),
                "custom metadata is valid JSON but not an object; preserving raw text"
            );
            (raw_map(text), true)
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                bytes = text.len(),
                "custom metadata is not valid JSON; preserving raw text"
            );
            (raw_map(text), true)
        }
    }
}

fn raw_map(text: &str) -> JsonMap<String, JsonValue> {
    let mut map = JsonMap::new();
    map.insert(RAW_METADATA_KEY.into(), JsonValue::String(text.into()));
    map
}

fn overlay(map: &mut JsonMap<String, JsonValue>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        if !v.is_empty() {
            map.insert(key.to_string(), JsonValue::String(v.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, RAW_METADATA_KEY};
    use crate::connector_types::{CustomMetadata, RawMetadataInput};
    use serde_json::{json, Map as JsonMap};

    fn text_input(text: &str) -> RawMetadataInput {
        RawMetadataInput {
            custom_metadata: Some(CustomMetadata::Text(text.into())),
            ..RawMetadataInput::default()
        }
    }

    #[test]
    fn well_formed_object_text_parses_to_entries() {
        let normalized = normalize(&text_input(r#"{"project": "demo", "env": "dev"}"#));
        assert_eq!(normalized.get("project"), Some(&json!("demo")));
        assert_eq!(normalized.get("env"), Some(&json!("dev")));
        assert!(!normalized.used_raw_fallback());
    }

    #[test]
    fn malformed_text_is_preserved_verbatim() {
        let text = "{not json at all";
        let normalized = normalize(&text_input(text));
        assert_eq!(normalized.get(RAW_METADATA_KEY), Some(&json!(text)));
        assert!(normalized.used_raw_fallback());
        assert_eq!(normalized.raw_fallback_bytes(), Some(text.len()));
    }

    #[test]
    fn non_object_json_text_is_preserved_verbatim() {
        let normalized = normalize(&text_input("[1, 2, 3]"));
        assert_eq!(normalized.get(RAW_METADATA_KEY), Some(&json!("[1, 2, 3]")));
        assert!(normalized.used_raw_fallback());
    }

    #[test]
    fn blank_text_yields_empty_bag() {
        let normalized = normalize(&text_input("   \n"));
        assert!(normalized.is_empty());
        assert!(!normalized.used_raw_fallback());
    }

    #[test]
    fn structured_input_is_used_without_reparse() {
        let mut map = JsonMap::new();
        map.insert("workflow".into(), json!("main-flow"));
        let normalized = normalize(&RawMetadataInput {
            custom_metadata: Some(CustomMetadata::Structured(map)),
            ..RawMetadataInput::default()
        });
        assert_eq!(normalized.get("workflow"), Some(&json!("main-flow")));
        assert!(!normalized.used_raw_fallback());
    }

    #[test]
    fn session_overlay_wins_over_custom_keys() {
        let normalized = normalize(&RawMetadataInput {
            session_id: Some("A".into()),
            custom_metadata: Some(CustomMetadata::Text(r#"{"sessionId": "B"}"#.into())),
            ..RawMetadataInput::default()
        });
        assert_eq!(normalized.get("sessionId"), Some(&json!("A")));
    }

    #[test]
    fn overlay_applies_session_then_user() {
        let normalized = normalize(&RawMetadataInput {
            session_id: Some("s-1".into()),
            user_id: Some("u-1".into()),
            custom_metadata: None,
        });
        let keys: Vec<&String> = normalized.entries().keys().collect();
        assert_eq!(keys, ["sessionId", "userId"]);
    }

    #[test]
    fn empty_identifiers_are_not_overlaid() {
        let normalized = normalize(&RawMetadataInput {
            session_id: Some(String::new()),
            user_id: None,
            custom_metadata: None,
        });
        assert!(normalized.is_empty());
    }

    #[test]
    fn extra_body_wraps_nonempty_metadata_only() {
        let normalized = normalize(&RawMetadataInput::default());
        assert_eq!(normalized.extra_body(), None);

        let normalized = normalize(&RawMetadataInput {
            session_id: Some("s-1".into()),
            ..RawMetadataInput::default()
        });
        assert_eq!(
            normalized.extra_body(),
            Some(json!({"metadata": {"sessionId": "s-1"}}))
        );
    }
}
