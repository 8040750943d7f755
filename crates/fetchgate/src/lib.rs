//! Top-level facade crate for fetchgate.
//!
//! Re-exports the core policy engine and the axum gateway so users can depend
//! on a single crate.

pub mod core {
    pub use fetchgate_core::*;
}

pub mod gateway {
    pub use fetchgate_gateway::*;
}
