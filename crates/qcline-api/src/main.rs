//! Binary entrypoint for the qcline API server.
use qcline_api::{run, ApiConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qcline_api=info,qcline_report=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // QCLINE_ADDR, QCLINE_PROFILE and QCLINE_TEMPLATES override the defaults
    let config = ApiConfig::from_env();
    run(config).await?;
    Ok(())
}
