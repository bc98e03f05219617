//! Conversions between domain records and wire payloads.
//!
//! Inbound (`to_domain`) conversions validate names before building a
//! record. Outbound (`to_payload`) conversions decode stored text into its
//! wire shape. Every function is pure and fails with a typed
//! [`preheat_core::error::CoreError`] instead of logging.

pub mod instance;
pub mod policy;
pub mod provider;
pub mod timestamp;
