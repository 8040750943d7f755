//! `ViolationLogger` implementations used by the gateway.

use std::sync::Arc;

use fetchgate_core::metadata::{Dest, Mode, Site, SEC_FETCH_DEST, SEC_FETCH_MODE, SEC_FETCH_SITE};
use fetchgate_core::{RequestView, ViolationLogger};

use super::metrics::GatewayMetrics;

const ABSENT: &str = "absent";

/// Emits one structured `warn` event per violation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingViolationLogger;

impl ViolationLogger for TracingViolationLogger {
    fn log(&self, request: &dyn RequestView) {
        tracing::warn!(
            method = request.method(),
            path = request.path(),
            site = request.header(SEC_FETCH_SITE).unwrap_or(ABSENT),
            mode = request.header(SEC_FETCH_MODE).unwrap_or(ABSENT),
            dest = request.header(SEC_FETCH_DEST).unwrap_or(ABSENT),
            "fetch metadata policy violation"
        );
    }
}

/// Counts violations by canonicalised site/mode/dest.
pub struct MetricsViolationLogger {
    metrics: Arc<GatewayMetrics>,
}

impl MetricsViolationLogger {
    pub fn new(metrics: Arc<GatewayMetrics>) -> Self {
        Self { metrics }
    }
}

impl ViolationLogger for MetricsViolationLogger {
    fn log(&self, request: &dyn RequestView) {
        // Raw header values are attacker-controlled; only canonical tokens become labels.
        let site = request.header(SEC_FETCH_SITE).and_then(Site::parse);
        let mode = request.header(SEC_FETCH_MODE).and_then(Mode::parse);
        let dest = request.header(SEC_FETCH_DEST).and_then(Dest::parse);
        self.metrics.violations.inc(&[
            ("site", site.as_ref().map_or(ABSENT, Site::as_str)),
            ("mode", mode.as_ref().map_or(ABSENT, Mode::as_str)),
            ("dest", dest.as_ref().map_or(ABSENT, Dest::as_str)),
        ]);
    }
}

/// Forwards each violation to every inner logger, in order.
#[derive(Default)]
pub struct FanoutLogger {
    sinks: Vec<Arc<dyn ViolationLogger>>,
}

impl FanoutLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn ViolationLogger>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl ViolationLogger for FanoutLogger {
    fn log(&self, request: &dyn RequestView) {
        for sink in &self.sinks {
            sink.log(request);
        }
    }
}
