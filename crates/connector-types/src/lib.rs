//! Shared type definitions for the LiteLLM chat connector.
//!
//! Everything the host hands over per invocation lives here: credentials,
//! the per-node option bag, metadata inputs, and the versioned model
//! selector, along with the resolved configuration that is handed to the
//! downstream chat-model client.

pub mod config;
pub mod credentials;
pub mod metadata;
pub mod model;
pub mod options;

pub use config::{ModelKwargs, ResolveWarning, ResolvedChatConfig};
pub use credentials::{Credentials, DEFAULT_BASE_URL};
pub use metadata::{CustomMetadata, RawMetadataInput};
pub use model::{LocatorMode, ModelEntry, ModelSelector, ModelsPage, SchemaVersion};
pub use options::{ChatOptions, ReasoningEffort, ResponseFormat};
