use hrdesk::infrastructure::config::ApiConfig;
use hrdesk::infrastructure::state::AppState;
use hrdesk::presentation::cli::{self, Cli};
use hrdesk::shared::dates;

use clap::Parser;
use dotenvy::dotenv;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Logs go to stderr so command output on stdout stays clean
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "hrdesk=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    let args = Cli::parse();
    let config = load_config(args.api_url.as_deref())?;
    if args.command.needs_api() {
        tracing::debug!("using API at {}", config.base_url);
    }
    let state = AppState::from_config(&config)?;

    let output = cli::execute(args.command, &state, dates::today()).await?;
    print!("{}", output);

    Ok(())
}

fn load_config(api_url: Option<&str>) -> anyhow::Result<ApiConfig> {
    let config = ApiConfig::from_env();
    match api_url {
        Some(url) => {
            cli::ensure_api_url(url)?;
            Ok(config.with_base_url(url))
        }
        None => Ok(config),
    }
}
