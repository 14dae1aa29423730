//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` owns the base address and the interceptor chain, `api` holds
//! endpoint calls, `types` defines the wire schema, and `error` the shared
//! failure type.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
