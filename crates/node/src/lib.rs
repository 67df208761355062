//! Host-facing surface: per-item parameter decoding, the supply-data entry
//! point that composes normalization and resolution, and the trace context
//! for the observability side-channel.

pub mod parameters;
pub mod supply;
pub mod trace;

pub use parameters::{decode_model_selector, NodeParameters};
pub use supply::{supply_request_config, SuppliedConfig};
pub use trace::TraceContext;

#[cfg(test)]
#[path = "../tests/supply_tests.rs"]
mod supply_tests;
