use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use todo_core::EnvSecretResolver;
use todo_server::config::ServerConfig;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,todo_server=debug,todo_core=debug,tower_http=info")
    });
    fmt().with_env_filter(filter).with_target(true).init();

    let config = ServerConfig::parse();
    info!("todo-server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(config).await {
        error!("server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    let store = todo_server::connect_store(&config, &EnvSecretResolver::new()).await?;
    info!(backend = store.backend(), "store ready");

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    todo_server::run(listener, store).await.context("server error")?;
    info!("server stopped");
    Ok(())
}
