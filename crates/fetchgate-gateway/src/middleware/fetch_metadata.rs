use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use fetchgate_core::{Outcome, PolicyEngine};

use crate::obs::GatewayMetrics;
use crate::transport::HttpRequestView;

/// Shared state for the guard. Cheap to clone.
#[derive(Clone)]
pub struct FetchMetadataGate {
    engine: Arc<PolicyEngine>,
    metrics: Arc<GatewayMetrics>,
}

impl FetchMetadataGate {
    pub fn new(engine: Arc<PolicyEngine>, metrics: Arc<GatewayMetrics>) -> Self {
        Self { engine, metrics }
    }

    /// Wrap every route of `app` with the guard.
    pub fn protect<S>(self, app: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        app.layer(middleware::from_fn_with_state(self, fetch_metadata_guard))
    }
}

pub async fn fetch_metadata_guard(
    State(gate): State<FetchMetadataGate>,
    req: Request,
    next: Next,
) -> Response {
    let outcome = gate.engine.evaluate(&HttpRequestView::new(&req));
    gate.metrics.decisions.inc(&[("outcome", outcome.as_str())]);

    match outcome {
        Outcome::Allow => next.run(req).await,
        Outcome::Block => StatusCode::FORBIDDEN.into_response(),
        Outcome::Redirect(target) => redirect(&target),
    }
}

fn redirect(target: &str) -> Response {
    match HeaderValue::from_str(target) {
        Ok(location) => {
            let mut resp = StatusCode::MOVED_PERMANENTLY.into_response();
            resp.headers_mut().insert(header::LOCATION, location);
            resp
        }
        Err(_) => {
            // Url serialisation is always a valid header value; keep the request blocked regardless.
            tracing::error!(%target, "redirect target is not a valid Location header");
            StatusCode::FORBIDDEN.into_response()
        }
    }
}
