use crate::app::App;
use crate::config::Config;
use crate::fetcher::WebhookClient;
use crate::responses::error_response;
use crate::router::handle;
use anyhow::{Context, Result};
use astra::{Request, Server};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod cache;
mod config;
mod domain;
mod errors;
mod fetcher;
mod query;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listings_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let source = WebhookClient::new(config.webhook_url.clone(), config.fetch_timeout)
        .context("Failed to build webhook client")?;
    let app = App::new(Box::new(source), config.cache_ttl);

    info!(addr = %config.bind_addr, "Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    server
        .serve(move |req: Request, _info| {
            let path = req.uri().path().to_string();
            match handle(req, &app) {
                Ok(resp) => resp,
                Err(err) => {
                    warn!(%path, error = %err, "request failed");
                    error_response(err)
                }
            }
        })
        .context("Server ended with error")?;

    info!("Server shut down cleanly.");
    Ok(())
}
