//! Axum router wiring.
//!
//! Ops routes are mounted beside the application, not behind the guard.
//! Exempt paths are policy input only; they never become routes.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

/// Protect `app` with the fetch metadata guard and add ops routes.
pub fn build_router(state: AppState, app: Router) -> Router {
    let protected = state.gate().protect(app);

    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
        .merge(protected)
}

/// Placeholder application: any method on any path answers `200 ok`.
pub fn demo_app() -> Router {
    Router::new().fallback(ops::healthz)
}
