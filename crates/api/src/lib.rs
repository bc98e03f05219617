//! API boundary for preheat policies and provider instances.
//!
//! Exposes the wire payloads, the converters between payloads and domain
//! records, and the HTTP error mapping used by the handler layer.

pub mod convert;
pub mod error;
pub mod payload;
