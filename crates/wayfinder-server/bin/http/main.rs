mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use tracing::info;
use wayfinder_resolver::ResolverRegistry;
use wayfinder_server::{App, AppState, DataUriTemplate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        resolver_uri = %config.resolver_uri,
        data_uri_template = %config.data_uri_template,
        "starting wayfinder server"
    );

    let registry = ResolverRegistry::with_defaults()?;

    let resolver = registry
        .new_resolver(&config.resolver_uri)
        .await
        .context("failed to create resolver")?;

    let template = DataUriTemplate::parse(&config.data_uri_template)
        .context("failed to parse data URI template")?;

    let state = AppState::builder()
        .resolver(resolver)
        .template(template)
        .build();

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening for requests");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
