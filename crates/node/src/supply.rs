use crate::connector_core::error::ConnectorError;
use crate::connector_core::metadata::normalize;
use crate::connector_core::resolver::resolve;
use crate::connector_node::parameters::{decode_model_selector, NodeParameters};
use crate::connector_node::trace::TraceContext;
use crate::connector_types::{Credentials, ResolveWarning, ResolvedChatConfig, SchemaVersion};

/// Everything the host needs back for one item: the configuration for the
/// chat-model client, the advisory warnings, and the trace context for the
/// observability sink.
#[derive(Debug, Clone)]
pub struct SuppliedConfig {
    pub config: ResolvedChatConfig,
    pub warnings: Vec<ResolveWarning>,
    pub trace: TraceContext,
}

/// Entry point for one workflow item. Decodes the versioned model
/// parameter, normalizes the metadata inputs, resolves the request
/// configuration, and binds the trace context. The item index is a
/// correlation token only; resolution does not depend on it.
pub fn supply_request_config(
    credentials: &Credentials,
    parameters: &NodeParameters,
    schema_version: SchemaVersion,
    item_index: usize,
) -> Result<SuppliedConfig, ConnectorError> {
    let selector = decode_model_selector(&parameters.model, schema_version)?;
    let metadata = normalize(&parameters.json_metadata);
    let (config, warnings) = resolve(credentials, &parameters.options, &selector, &metadata)?;

    let trace = TraceContext::new(item_index, metadata.into_entries());
    trace.record_prepared(&config);

    Ok(SuppliedConfig {
        config,
        warnings,
        trace,
    })
}
