//! Core of the connector: the metadata normalizer and the request
//! configuration resolver, plus the error taxonomy shared by the outer
//! layers.
//!
//! Both components are synchronous pure functions over their inputs; all
//! I/O lives in the discovery and node layers.

pub mod error;
pub mod metadata;
pub mod resolver;

pub use error::{ConfigError, ConnectorError, TransportError};
pub use metadata::{normalize, NormalizedMetadata, RAW_METADATA_KEY};
pub use resolver::{resolve, supports_reasoning_effort};

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod resolver_tests;
