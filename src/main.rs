use clap::Parser;
use portfolio_admin::cli::{self, handlers, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn load_env() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{env}");
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<bool> {
    load_env();

    // stdout carries command output, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let notice = cli::run(cli).await?;
    handlers::report(&notice);

    Ok(!notice.is_error())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    match start() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}
