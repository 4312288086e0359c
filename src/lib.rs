// Contribution Stats Library
// Serves yearly statistics derived from the GitHub contribution calendar

pub mod analytics;
pub mod error;
pub mod github;
pub mod logging;
pub mod server;

use std::sync::Arc;

use error::AppError;
use github::GitHubClient;
use server::{ServiceConfig, StatsServer, TOKEN_ENV};

/// Starts the HTTP service and blocks until Ctrl-C
pub async fn run(config: ServiceConfig) -> Result<(), AppError> {
    let client = GitHubClient::new(config.github_client_config())?;
    if !client.has_token() {
        log::warn!(
            "{} is not set; GitHub requests will be sent without a bearer token",
            TOKEN_ENV
        );
    }

    let server = StatsServer::new(Arc::new(client), &config);
    let handle = server.start(None).await?;

    tokio::signal::ctrl_c().await?;
    log::info!("Shutting down server on port {}", handle.port());
    handle.shutdown();

    Ok(())
}
