use anyhow::Context;

use oauthgate_infra::GateConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    oauthgate_observability::init();

    let config = GateConfig::from_env().context("invalid configuration")?;
    if config.bootstrap_client.is_none() {
        tracing::warn!("no bootstrap client configured; every request will be rejected");
    }

    let services = oauthgate_api::app::services::AppServices::from_config(&config)
        .context("failed to seed credential store")?;
    let app = oauthgate_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
