use anyhow::Context;
use clap::Parser;

mod app_context;
mod cli;
mod health;
mod http;
mod logging;
mod maps;
mod render;
mod search;
mod sessions;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = cli::Args::parse();
    logging::init();

    let maps_client = maps::init(&args).context("Failed to initialize the maps client")?;
    let app_context =
        app_context::init(&args, maps_client).context("Failed to load page templates")?;
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}", args.listen_address))?;
    tracing::info!("HTTP server listening on: {}", args.listen_address);
    axum::serve(listener, router)
        .await
        .context("Error spinning up the HTTP server")
}
