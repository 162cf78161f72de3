use anyhow::{Context, Result};

use super::app_context::AppContext;
use super::args::{Cli, Commands};
use super::handlers::{self, settle};
use crate::shared::config::ApiConfig;
use crate::shared::ui::Notice;

/// Builds the context from the environment plus CLI overrides and runs one
/// command. Only setup failures come back as `Err`; everything else is a
/// notice.
pub async fn run(cli: Cli) -> Result<Notice> {
    let mut config = ApiConfig::from_env().context("Invalid API configuration")?;
    if let Some(api_url) = &cli.api_url {
        config = config
            .with_base_url(api_url)
            .context("Invalid --api-url")?;
    }

    tracing::info!(base_url = %config.base_url, "Using portfolio API");

    let ctx = AppContext::build(&config).context("Cannot create the API client")?;

    if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        if !matches!(cli.command, Commands::Login { .. }) {
            if let Err(notice) = handlers::auth::sign_in(&ctx, email, password).await {
                return Ok(notice);
            }
        }
    }

    Ok(dispatch(&ctx, cli.command).await)
}

pub async fn dispatch(ctx: &AppContext, command: Commands) -> Notice {
    match command {
        Commands::Projects { action } => handlers::projects::handle(ctx, action).await,
        Commands::Profile { action } => handlers::profile::handle(ctx, action).await,
        Commands::Cv { action } => handlers::cv::handle(ctx, action).await,
        Commands::Messages { action } => handlers::messages::handle(ctx, action).await,
        Commands::Login { email, password } => {
            settle(handlers::auth::login(ctx, &email, &password).await)
        }
        Commands::Refresh => settle(handlers::auth::refresh(ctx).await),
        Commands::Whoami => settle(handlers::auth::whoami(ctx).await),
        Commands::Logout => settle(handlers::auth::logout(ctx)),
        Commands::Dashboard => settle(handlers::dashboard::show(ctx).await),
        Commands::Chat { questions } => settle(handlers::chat::ask(&questions)),
    }
}
