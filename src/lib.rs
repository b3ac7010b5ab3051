//! Sovereign -- a geo-political sovereignty model with keyed persistence.
//!
//! Exposes the state catalog, the sovereign-entity capability traits, and
//! the key-value persistence layer for use by integration tests and
//! downstream consumers.

pub mod geo;
pub mod store;
