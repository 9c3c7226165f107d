//! Operator CLI for the CryptoV7 news service.
//!
//! Runs one-off queries against the configured news provider with the same
//! facade the server uses, so a query here burns the same quota and exercises
//! the same enrichment path.

use clap::{Parser, Subcommand};

use cryptov7_news::{
    NewsBatch, NewsService, DEFAULT_SYMBOL_PAGE_SIZE, DEFAULT_TOPIC, DEFAULT_TOPIC_PAGE_SIZE,
};
use cryptov7_newsapi::NewsApiClient;
use cryptov7_sentiment::Classifier;

#[derive(Debug, Parser)]
#[command(name = "cryptov7-cli")]
#[command(about = "CryptoV7 news service command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and enrich news for a free-text topic
    News {
        /// Search query
        #[arg(long, default_value = DEFAULT_TOPIC)]
        query: String,

        /// Number of articles to fetch (1-100)
        #[arg(long, default_value_t = DEFAULT_TOPIC_PAGE_SIZE)]
        page_size: usize,
    },
    /// Fetch and enrich news for a ticker symbol
    Symbol {
        /// Ticker symbol, e.g. BTC or ETH
        symbol: String,

        /// Number of articles to fetch (1-100)
        #[arg(long, default_value_t = DEFAULT_SYMBOL_PAGE_SIZE)]
        page_size: usize,
    },
    /// Probe the news provider and report key validity
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cryptov7_core::load_app_config_from_env()?;

    let client = NewsApiClient::new(
        config.news_api_key.clone(),
        config.news_request_timeout_secs,
        &config.news_user_agent,
    )?;
    let classifier = Classifier::init(config.sentiment_model_url.as_deref()).await;
    let service = NewsService::new(client, classifier);

    match cli.command {
        Commands::News { query, page_size } => {
            let batch = service.crypto_news(&query, page_size).await?;
            print_batch(&batch);
        }
        Commands::Symbol { symbol, page_size } => {
            let symbol = symbol.trim().to_uppercase();
            let batch = service.symbol_news(&symbol, page_size).await?;
            print_batch(&batch);
        }
        Commands::Health => {
            match service.probe().await {
                Ok(()) => {
                    println!("news provider reachable, API key valid");
                    println!("classifier mode: {}", service.classifier_mode());
                }
                Err(e) => {
                    println!("news provider check failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_batch(batch: &NewsBatch) {
    println!(
        "{} articles for '{}' ({} degraded)",
        batch.articles.len(),
        batch.query,
        batch.degraded_count
    );
    for enriched in &batch.articles {
        let when = enriched
            .article
            .published_at
            .map_or_else(|| "unknown time".to_string(), |t| t.to_rfc3339());
        println!(
            "  [{:?} {:.2}] {} — {} ({when})",
            enriched.sentiment.label,
            enriched.sentiment.score,
            enriched.article.title,
            enriched.article.source,
        );
    }
}
