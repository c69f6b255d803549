use swallow_api::config::ApiConfig;
use swallow_api::state::AppState;
use swallow_core::Cohort;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;
    config.log_format.init_tracing();

    let cohort = Cohort::reference()?;
    tracing::info!(
        patients = cohort.size(),
        measures = cohort.measures().len(),
        "cohort loaded"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, swallow_api::app(AppState::new(cohort)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
