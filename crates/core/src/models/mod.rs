//! Domain records for preheat policies, provider instances and provider
//! metadata.
//!
//! These are the shapes the persistence and scheduling layers work with.
//! Their wire counterparts live in the API crate.

pub mod encoded;
pub mod instance;
pub mod policy;
pub mod provider;
