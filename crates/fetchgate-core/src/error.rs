//! Shared error type across fetchgate crates.
//!
//! Policy violations are not errors: a blocked request is an ordinary
//! [`Outcome`](crate::policy::Outcome). Everything here is a setup-time failure.

use thiserror::Error;

/// Stable error codes (used in startup logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration is internally inconsistent.
    Config,
    /// Configuration input could not be parsed.
    BadRequest,
    /// Unsupported configuration schema version.
    UnsupportedVersion,
    /// Internal failure (I/O while loading configuration).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FetchGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum FetchGateError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FetchGateError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            FetchGateError::Config(_) => ErrorCode::Config,
            FetchGateError::BadRequest(_) => ErrorCode::BadRequest,
            FetchGateError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            FetchGateError::Internal(_) => ErrorCode::Internal,
        }
    }
}
