//! Model discovery against the resolved base URL.
//!
//! Populates the node's model selection list and backs the credential test.
//! Resolution never depends on this module: direct-ID model entry stays
//! valid even when listing fails.

pub mod listing;
pub mod transport;

pub use listing::{
    filter_models, is_selectable_chat_model, list_models, search_models, verify_credentials,
};
pub use transport::{HttpTransport, ReqwestTransport, TransportConfig};

#[cfg(test)]
#[path = "../tests/listing_tests.rs"]
mod listing_tests;
