//! Fetch metadata resource isolation policy.
//!
//! `PolicyConfig` is validated once by its builder and never mutated after;
//! `PolicyEngine` wraps it and is shared across requests via `Arc` without
//! locking.

pub mod config;
pub mod engine;

pub use config::{PolicyConfig, PolicyConfigBuilder};
pub use engine::{Assessment, Outcome, PolicyEngine, Reason, Verdict};
