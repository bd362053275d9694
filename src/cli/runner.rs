//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::endpoint::Endpoint;
use crate::http::{
    ClientConfig, GithubClient, NetworkRequest, ReposRequest, SnakeCaseReposRequest, UserRequest,
};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Client configuration from the global flags
    pub fn client_config(&self) -> ClientConfig {
        let mut builder = ClientConfig::builder().base_url(&self.cli.base_url);
        if let Some(secs) = self.cli.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client =
            GithubClient::with_config(self.client_config()).context("Failed to build HTTP client")?;

        let output = match &self.cli.command {
            Commands::Profile { username } => {
                fetch_one(&client, &UserRequest, Endpoint::profile(username)).await?
            }
            Commands::Repos {
                username,
                snake_case: false,
            } => fetch_one(&client, &ReposRequest, Endpoint::repos(username)).await?,
            Commands::Repos {
                username,
                snake_case: true,
            } => fetch_one(&client, &SnakeCaseReposRequest, Endpoint::repos(username)).await?,
        };

        println!("{output}");
        Ok(())
    }
}

/// Fetch one endpoint and render the model as pretty JSON
async fn fetch_one<R>(client: &GithubClient, request: &R, endpoint: Endpoint) -> Result<String>
where
    R: NetworkRequest,
    R::Model: Serialize,
{
    info!(%endpoint, "Fetching");

    match request.fetch_request(client, &endpoint).await {
        Ok(model) => Ok(serde_json::to_string_pretty(&model)?),
        Err(e) => bail!("{endpoint}: {}", e.message()),
    }
}
