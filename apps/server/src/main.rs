use stockeval_server::{api::app_router, build_state, config::Config, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let state = build_state(&config)?;
    let router = app_router(state, &config)?;
    tracing::info!(
        "{} ({}) listening on {}",
        config.app_name,
        config.environment,
        config.listen_addr
    );
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
