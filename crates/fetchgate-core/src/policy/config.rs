use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::error::{FetchGateError, Result};
use crate::logger::ViolationLogger;

/// Immutable policy configuration. Construct with [`PolicyConfig::builder`].
#[derive(Clone)]
pub struct PolicyConfig {
    exempt_paths: HashSet<String>,
    nav_isolation: bool,
    report_only: bool,
    redirect_target: Option<String>,
    logger: Option<Arc<dyn ViolationLogger>>,
}

impl PolicyConfig {
    pub fn builder() -> PolicyConfigBuilder {
        PolicyConfigBuilder::default()
    }

    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.contains(path)
    }
    pub fn nav_isolation(&self) -> bool {
        self.nav_isolation
    }
    pub fn report_only(&self) -> bool {
        self.report_only
    }
    /// Exactly as configured; emitted verbatim as `Location`.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_target.as_deref()
    }
    pub fn logger(&self) -> Option<&dyn ViolationLogger> {
        self.logger.as_deref()
    }
}

impl Default for PolicyConfig {
    /// Enforce mode, no exemptions, no logger.
    fn default() -> Self {
        Self {
            exempt_paths: HashSet::new(),
            nav_isolation: false,
            report_only: false,
            redirect_target: None,
            logger: None,
        }
    }
}

impl fmt::Debug for PolicyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyConfig")
            .field("exempt_paths", &self.exempt_paths)
            .field("nav_isolation", &self.nav_isolation)
            .field("report_only", &self.report_only)
            .field("redirect_target", &self.redirect_target)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

/// Named-option builder; all validation happens in [`build`](Self::build).
#[derive(Default)]
pub struct PolicyConfigBuilder {
    exempt_paths: Vec<String>,
    nav_isolation: bool,
    report_only: bool,
    redirect_to: Option<String>,
    logger: Option<Arc<dyn ViolationLogger>>,
}

impl PolicyConfigBuilder {
    /// Path of an endpoint designed to serve cross-origin callers.
    pub fn exempt_path(mut self, path: impl Into<String>) -> Self {
        self.exempt_paths.push(path.into());
        self
    }

    pub fn exempt_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Reject every cross-site navigation.
    pub fn nav_isolation(mut self, enabled: bool) -> Self {
        self.nav_isolation = enabled;
        self
    }

    /// Log would-be blocks but let them through. Requires a logger.
    pub fn report_only(mut self, enabled: bool) -> Self {
        self.report_only = enabled;
        self
    }

    /// Answer would-be blocks with a 301 to this absolute URL.
    pub fn redirect_to(mut self, url: impl Into<String>) -> Self {
        self.redirect_to = Some(url.into());
        self
    }

    pub fn logger(mut self, logger: Arc<dyn ViolationLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<PolicyConfig> {
        if self.report_only && self.logger.is_none() {
            return Err(FetchGateError::Config(
                "report_only requires a violation logger".into(),
            ));
        }

        let mut exempt_paths = HashSet::with_capacity(self.exempt_paths.len());
        for p in self.exempt_paths {
            if !p.starts_with('/') {
                return Err(FetchGateError::Config(format!(
                    "exempt path must start with '/': {p:?}"
                )));
            }
            exempt_paths.insert(p);
        }

        // Url::parse rejects relative references, so success implies absolute.
        // The parsed form is discarded: serialisation would normalise the target.
        if let Some(raw) = &self.redirect_to {
            Url::parse(raw).map_err(|e| {
                FetchGateError::Config(format!("redirect target must be an absolute URL: {raw} ({e})"))
            })?;
        }

        Ok(PolicyConfig {
            exempt_paths,
            nav_isolation: self.nav_isolation,
            report_only: self.report_only,
            redirect_target: self.redirect_to,
            logger: self.logger,
        })
    }
}
