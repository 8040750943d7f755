//! fetchgate gateway binary.
//!
//! Serves a demo application behind the fetch metadata guard.
//! Config is read from `FETCHGATE_CONFIG` (default `fetchgate.yaml`).

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use fetchgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "fetchgate-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> fetchgate_core::Result<()> {
    let cfg = config::load()?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state.clone(), router::demo_app());

    tracing::info!(%listen, "fetchgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| fetchgate_core::FetchGateError::Internal(format!("bind failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| fetchgate_core::FetchGateError::Internal(format!("server failed: {e}")))
}
