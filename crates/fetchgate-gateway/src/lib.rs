//! fetchgate gateway library entry.
//!
//! Wires the core policy engine into axum: strict YAML config, the fetch
//! metadata middleware, violation loggers, metrics, and ops endpoints. Used by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod middleware;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
