//! Observability: in-process metrics and violation loggers.

pub mod metrics;
pub mod violations;

pub use metrics::GatewayMetrics;
pub use violations::{FanoutLogger, MetricsViolationLogger, TracingViolationLogger};
