use serde_json::{Map as JsonMap, Value as JsonValue};
use uuid::Uuid;

use crate::connector_types::ResolvedChatConfig;

/// Correlation context handed to the observability sink alongside the
/// resolved configuration. The metadata it exposes is the normalizer's
/// output, unmodified.
#[derive(Debug, Clone)]
pub struct TraceContext {
    pub invocation_id: Uuid,
    pub item_index: usize,
    metadata: JsonMap<String, JsonValue>,
}

impl TraceContext {
    pub fn new(item_index: usize, metadata: JsonMap<String, JsonValue>) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            item_index,
            metadata,
        }
    }

    pub fn metadata(&self) -> &JsonMap<String, JsonValue> {
        &self.metadata
    }

    pub(crate) fn record_prepared(&self, config: &ResolvedChatConfig) {
        tracing::info!(
            invocation = %self.invocation_id,
            item = self.item_index,
            model = %config.model,
            base_url = %config.base_url,
            metadata_keys = ?self.metadata.keys().collect::<Vec<_>>(),
            "prepared chat model configuration"
        );
    }
}
