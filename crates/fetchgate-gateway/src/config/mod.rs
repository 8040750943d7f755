//! Gateway configuration: strict YAML, validated before anything is built.
//!
//! The file is chosen by `FETCHGATE_CONFIG`, falling back to `fetchgate.yaml`
//! in the working directory.

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use fetchgate_core::error::{FetchGateError, Result};

pub use schema::{FetchMetadataSection, GatewayConfig, GatewaySection, ViolationLog};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FETCHGATE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "fetchgate.yaml";

/// Resolve the config path from an optional override (normally `CONFIG_ENV`).
pub fn config_path(override_path: Option<String>) -> PathBuf {
    override_path
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load the config named by `FETCHGATE_CONFIG` (or the default path).
pub fn load() -> Result<GatewayConfig> {
    load_from_file(config_path(std::env::var(CONFIG_ENV).ok()))
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<GatewayConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        FetchGateError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    let cfg = load_from_str(&s)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Parse and validate. Report-only without a violation log fails here,
/// before any engine exists.
pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| FetchGateError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
