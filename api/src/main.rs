use std::sync::Arc;

use anyhow::Error;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::http::server::http_server;
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = http_server::state(args.clone()).await?;
    let router = http_server::router(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.server.port)).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}
