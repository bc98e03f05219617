//! Domain types, validation and codecs for the preheat policy and provider
//! instance mapping layer.
//!
//! Everything here is pure: no I/O, no shared mutable state.

pub mod auth_data;
pub mod error;
pub mod models;
pub mod naming;
pub mod types;
