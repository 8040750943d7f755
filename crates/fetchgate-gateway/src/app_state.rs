//! Shared application state for the fetchgate gateway.
//!
//! Compiles the loaded config into an immutable `PolicyEngine` once at startup.
//! Startup errors are returned, never panicked.

use std::sync::Arc;

use fetchgate_core::error::Result;
use fetchgate_core::{PolicyConfig, PolicyEngine, ViolationLogger};

use crate::config::{GatewayConfig, ViolationLog};
use crate::middleware::FetchMetadataGate;
use crate::obs::{FanoutLogger, GatewayMetrics, MetricsViolationLogger, TracingViolationLogger};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    engine: Arc<PolicyEngine>,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let metrics = Arc::new(GatewayMetrics::default());
        let fm = &cfg.fetch_metadata;

        let mut builder = PolicyConfig::builder()
            .exempt_paths(fm.exempt_paths.iter().cloned())
            .nav_isolation(fm.nav_isolation)
            .report_only(fm.report_only);
        if let Some(url) = &fm.redirect_url {
            builder = builder.redirect_to(url.clone());
        }
        if let Some(logger) = violation_logger(fm.violation_log, &metrics) {
            builder = builder.logger(logger);
        }
        let policy = builder.build()?;

        tracing::info!(
            exempt_paths = fm.exempt_paths.len(),
            nav_isolation = fm.nav_isolation,
            report_only = fm.report_only,
            redirect = fm.redirect_url.is_some(),
            "fetch metadata policy compiled"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                engine: Arc::new(PolicyEngine::new(policy)),
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn engine(&self) -> Arc<PolicyEngine> {
        Arc::clone(&self.inner.engine)
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.inner.metrics)
    }

    pub fn gate(&self) -> FetchMetadataGate {
        FetchMetadataGate::new(self.engine(), self.metrics())
    }
}

/// `none` disables the logger entirely, metrics included.
fn violation_logger(
    kind: ViolationLog,
    metrics: &Arc<GatewayMetrics>,
) -> Option<Arc<dyn ViolationLogger>> {
    match kind {
        ViolationLog::None => None,
        ViolationLog::Tracing => Some(Arc::new(
            FanoutLogger::new()
                .with(Arc::new(TracingViolationLogger))
                .with(Arc::new(MetricsViolationLogger::new(Arc::clone(metrics)))),
        )),
    }
}
