use std::sync::Arc;

use anyhow::Context;

use sweetshop_api::app::{self, services::AppServices};
use sweetshop_api::config::ApiConfig;
use sweetshop_observability::LogFormat;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sweetshop_observability::init(LogFormat::Json);

    let config = ApiConfig::from_env()?;
    tracing::info!(
        data_file = %config.data_file.display(),
        low_stock_threshold = config.low_stock_threshold,
        "starting sweet shop api"
    );

    let services = AppServices::open_file(&config)
        .with_context(|| format!("failed to open inventory at {}", config.data_file.display()))?;
    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
