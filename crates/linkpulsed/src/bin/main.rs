use std::{net::SocketAddr, sync::Arc, time::Duration};

use clap::Parser;
use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use liblinkpulse::{AppState, build_router, http_client, seo::Seo, store::EntryStore};
use tracing::info;

use crate::cli::Cli;

mod cli;
mod telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = telemetry::init(cli.log_format, cli.log_dir.as_deref())?;
    color_eyre::install()?;

    // A store that exists but does not parse is fatal.
    let store = EntryStore::open(&cli.data_file)
        .await
        .wrap_err("failed to load entry store")?;

    let mut seo = Seo::load(&cli.seo_file).await?;
    seo.resolve_url(cli.project_domain.as_deref());

    let client = http_client(cli.check_timeout_secs.map(Duration::from_secs))?;

    let state = AppState {
        store: Arc::new(store),
        client,
        seo: Arc::new(seo),
    };
    let app = build_router(state, &cli.public_dir);

    let bind_addr = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!(e))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
