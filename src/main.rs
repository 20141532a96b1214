use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use faleproxy::app::{self, state::AppState};
use faleproxy::domain::ports::ConfigProvider;
use faleproxy::utils::{logger, validation::Validate};
use faleproxy::{CliConfig, HttpFetcher, ProxyEngine, Substitution};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_server_logger(config.verbose);

    tracing::info!("Starting faleproxy");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let substitution = Substitution::new(config.target_word(), config.substitute_word())?;
    let engine = ProxyEngine::new(HttpFetcher::new(), substitution);
    let state = Arc::new(AppState::new(engine));

    let router = app::build_router(state, config.static_dir());

    let addr: SocketAddr = format!("{}:{}", config.bind_host(), config.port()).parse()?;
    tracing::info!("Faleproxy server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
