use clap::Parser;
use std::sync::Arc;
use tracing::info;

use peptidehub_gateway::config::Args;
use peptidehub_gateway::logging::init_logging;
use peptidehub_gateway::rate_limit::{
    CLEANUP_INTERVAL, MAX_RESET_ATTEMPTS, RESET_WINDOW, ResetAttemptLimiter, spawn_cleanup,
};
use peptidehub_gateway::recovery::BaasRecoveryClient;
use peptidehub_gateway::routes::app_router;
use peptidehub_gateway::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // parse cli arguments
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let limiter = Arc::new(ResetAttemptLimiter::new());
    let mailer = Arc::new(BaasRecoveryClient::new(
        reqwest::Client::new(),
        args.auth_base_url(),
        args.anon_key.clone(),
        args.upstream_timeout(),
    ));
    let state = AppState::new(limiter.clone(), mailer, args.redirect_url.clone());

    let cleanup = spawn_cleanup(limiter, CLEANUP_INTERVAL);

    let app = app_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Gateway running on http://localhost:{}", args.port);
    info!("Forwarding password resets to {}", args.auth_base_url());
    info!(
        "Reset limit: {} requests per {} hours",
        MAX_RESET_ATTEMPTS,
        RESET_WINDOW.as_secs() / 3600
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cleanup.stop().await;
    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // no signal handler, keep serving
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
