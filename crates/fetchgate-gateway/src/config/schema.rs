use std::net::SocketAddr;

use serde::Deserialize;
use url::Url;

use fetchgate_core::error::{FetchGateError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub fetch_metadata: FetchMetadataSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FetchGateError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.fetch_metadata.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            FetchGateError::BadRequest(format!(
                "gateway.listen must be a valid SocketAddr: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Where policy violations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationLog {
    None,
    #[default]
    Tracing,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchMetadataSection {
    /// Endpoints that intentionally serve cross-origin callers.
    #[serde(default)]
    pub exempt_paths: Vec<String>,
    #[serde(default)]
    pub nav_isolation: bool,
    #[serde(default)]
    pub report_only: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub violation_log: ViolationLog,
}

impl FetchMetadataSection {
    pub fn validate(&self) -> Result<()> {
        if self.report_only && self.violation_log == ViolationLog::None {
            return Err(FetchGateError::Config(
                "fetch_metadata.report_only requires violation_log other than none".into(),
            ));
        }
        if let Some(raw) = &self.redirect_url {
            Url::parse(raw).map_err(|e| {
                FetchGateError::Config(format!(
                    "fetch_metadata.redirect_url must be an absolute URL: {raw} ({e})"
                ))
            })?;
        }
        if let Some(p) = self.exempt_paths.iter().find(|p| !p.starts_with('/')) {
            return Err(FetchGateError::Config(format!(
                "fetch_metadata.exempt_paths entries must start with '/': {p}"
            )));
        }
        Ok(())
    }
}
