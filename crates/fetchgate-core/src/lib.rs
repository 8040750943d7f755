//! fetchgate core: fetch metadata signal parsing, policy configuration, and the
//! decision engine.
//!
//! This crate carries no HTTP or runtime dependencies. Hosts adapt their
//! request type to [`metadata::RequestView`] and act on the returned
//! [`policy::Outcome`].
//!
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod logger;
pub mod metadata;
pub mod policy;

/// Shared result type.
pub use error::{FetchGateError, Result};
pub use logger::ViolationLogger;
pub use metadata::{FetchMetadata, RequestView};
pub use policy::{Outcome, PolicyConfig, PolicyEngine};
