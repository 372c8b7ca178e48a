//! FundFlow - Browse mutual fund instruments from the terminal
//!
//! Fetches the broker's instrument dump, caches it in memory with a TTL,
//! and serves paginated listings, fund reports and AI-generated insights.

use clap::Parser;

use fundflow::analysis;
use fundflow::cache::InstrumentCache;
use fundflow::catalog::Catalog;
use fundflow::cli::{Cli, Command};
use fundflow::config::{Config, ConfigError};
use fundflow::data::{InsightsClient, InstrumentsClient};

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let client = InstrumentsClient::new(&config.api_url, &config.api_key, &config.access_token);
    let catalog = Catalog::new(InstrumentCache::new(client, config.cache_ttl));

    match cli.command {
        Command::Funds { page, size } => {
            let page = catalog.page(page, size).await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Fund { tradingsymbol } => {
            let fund = catalog.fund(&tradingsymbol).await?;
            let report = analysis::report(&fund);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Insights { tradingsymbol } => {
            let api_key = config
                .gemini_api_key
                .clone()
                .ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;

            let fund = catalog.fund(&tradingsymbol).await?;

            let mut insights = InsightsClient::new(api_key, config.gemini_model.clone());
            if let Some(endpoint) = config.gemini_api_url.clone() {
                insights = insights.with_endpoint(endpoint);
            }

            let text = insights.generate_insights(&fund).await?;
            println!("{}", text);
        }
    }

    Ok(())
}
