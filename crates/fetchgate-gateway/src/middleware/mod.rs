//! HTTP middleware.
//!
//! The fetch metadata guard runs before any application handler and either
//! passes the request through untouched or answers it itself.

pub mod fetch_metadata;

pub use fetch_metadata::{fetch_metadata_guard, FetchMetadataGate};
