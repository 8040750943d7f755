use crate::metadata::{FetchMetadata, RequestView};

use super::config::PolicyConfig;

/// Raw policy verdict, before report-only / redirect resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Block,
}

/// Which rule decided the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    ExemptPath,
    NoFetchMetadata,
    TrustedSite,
    /// Cross-site OPTIONS without Sec-Fetch-Mode (browser preflight defect).
    PreflightWithoutMode,
    AllowedNavigation,
    NavigationIsolation,
    DisallowedNavigation,
    CrossSiteResource,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::ExemptPath => "exempt_path",
            Reason::NoFetchMetadata => "no_fetch_metadata",
            Reason::TrustedSite => "trusted_site",
            Reason::PreflightWithoutMode => "preflight_without_mode",
            Reason::AllowedNavigation => "allowed_navigation",
            Reason::NavigationIsolation => "navigation_isolation",
            Reason::DisallowedNavigation => "disallowed_navigation",
            Reason::CrossSiteResource => "cross_site_resource",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub verdict: Verdict,
    pub reason: Reason,
}

impl Assessment {
    fn allow(reason: Reason) -> Self {
        Self { verdict: Verdict::Allow, reason }
    }
    fn block(reason: Reason) -> Self {
        Self { verdict: Verdict::Block, reason }
    }
}

/// Final outcome handed back to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Continue unmodified.
    Allow,
    /// Terminal 403, empty body.
    Block,
    /// Terminal 301 to the configured target.
    Redirect(String),
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Allow => "allow",
            Outcome::Block => "block",
            Outcome::Redirect(_) => "redirect",
        }
    }
}

/// Fetch metadata policy runtime.
/// Construct once at startup, then share via Arc.
#[derive(Debug, Default)]
pub struct PolicyEngine {
    cfg: PolicyConfig,
}

impl PolicyEngine {
    pub fn new(cfg: PolicyConfig) -> Self {
        Self { cfg }
    }

    /// Pure classification; first matching rule wins.
    pub fn assess(&self, meta: &FetchMetadata) -> Assessment {
        if self.cfg.is_exempt(&meta.path) {
            return Assessment::allow(Reason::ExemptPath);
        }

        let Some(site) = &meta.site else {
            return Assessment::allow(Reason::NoFetchMetadata);
        };
        if site.is_trusted() {
            return Assessment::allow(Reason::TrustedSite);
        }

        // cross-site (unrecognised site tokens land here too)
        let Some(mode) = &meta.mode else {
            if meta.is_options() {
                return Assessment::allow(Reason::PreflightWithoutMode);
            }
            return Assessment::block(Reason::CrossSiteResource);
        };

        if !mode.is_navigation() {
            return Assessment::block(Reason::CrossSiteResource);
        }
        if self.cfg.nav_isolation() {
            return Assessment::block(Reason::NavigationIsolation);
        }

        let navigable = meta.dest.as_ref().is_some_and(|d| d.is_navigable_document());
        if meta.is_safe_method() && navigable {
            Assessment::allow(Reason::AllowedNavigation)
        } else {
            Assessment::block(Reason::DisallowedNavigation)
        }
    }

    /// Evaluate a request. Invokes the logger exactly once on a raw block.
    pub fn evaluate(&self, req: &dyn RequestView) -> Outcome {
        let meta = FetchMetadata::from_request(req);
        let assessment = self.assess(&meta);

        tracing::debug!(
            method = %meta.method,
            path = %meta.path,
            verdict = ?assessment.verdict,
            reason = assessment.reason.as_str(),
            "fetch metadata assessed"
        );

        if assessment.verdict == Verdict::Allow {
            return Outcome::Allow;
        }

        if let Some(logger) = self.cfg.logger() {
            logger.log(req);
        }

        if self.cfg.report_only() {
            return Outcome::Allow;
        }
        match self.cfg.redirect_target() {
            Some(target) => Outcome::Redirect(target.to_string()),
            None => Outcome::Block,
        }
    }
}
