mod config;
mod engine;
mod fetcher;
mod models;
mod scoring;
mod sink;
mod source;
mod types;

use std::io::stderr;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::config::RiskConfig;
use crate::engine::RiskEngine;
use crate::fetcher::{LendingApiClient, Throttle};
use crate::sink::CsvSink;
use crate::source::SheetWalletSource;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let log_level = args.get(1)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::INFO);

    setup_logging(log_level);

    let config = RiskConfig::default();

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    let source = SheetWalletSource::new(client.clone(), &config.sheet_url, &config.worksheet, &config.credentials_path);
    let fetcher = LendingApiClient::new(client, &config.api_base);
    let sink = CsvSink::new(&config.output_path);

    let engine = RiskEngine::new(source, fetcher, sink)
        .with_throttle(Throttle::new(config.throttle_delay));

    let timer = Instant::now();
    engine.run().await?;
    let duration = timer.elapsed();

    info!("Pipeline finished in: {duration:?}");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Logs go to stderr so they never interleave with anything the
    //      operator pipes or inspects on stdout.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
