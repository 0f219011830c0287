//! edu: EduAgent terminal client
//!
//! Shares the route guard and API client with the browser app; the session
//! token is kept in a file instead of `localStorage`.

mod cli;
mod commands;
mod store;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edu_client::{ApiClient, ClientConfig, ClientError};

use crate::cli::Cli;
use crate::store::{FileAuthStore, default_token_path};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{e:?}");
            eprintln!("error: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig::from_value(cli.api_url);
    let store = FileAuthStore::new(cli.token_file.unwrap_or_else(default_token_path));
    tracing::debug!(api = config.base_url(), token_file = %store.path().display(), "Starting");

    let client = ApiClient::from_config(&config, Arc::new(store))?;
    commands::execute(cli.command, &client).await
}

/// What the user sees for a failed command
fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ClientError>() {
        Some(ClientError::Api { status, message }) => format!("{message} (HTTP {status})"),
        Some(client_err) => client_err.user_message(),
        None => format!("{err:#}"),
    }
}
