use ai_news_digest::config::Cli;
use ai_news_digest::{DigestPipeline, FeedRegistry, OpenAiAdapter, RssFeedSource, Summarizer};
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt().with_env_filter(filter).with_target(false).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Digest run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let start_time = std::time::Instant::now();
    info!("Starting AI news digest");

    let registry = FeedRegistry::load(&cli.feeds_file);
    let source = RssFeedSource::new(cli.fetch_config()).context("Failed to build HTTP client")?;

    let summarizer = match cli.llm_config() {
        Some(llm_config) => {
            info!("Using model {} at {}", llm_config.model, llm_config.base_url);
            let adapter = OpenAiAdapter::new(llm_config).context("Failed to build LLM client")?;
            Summarizer::new(Arc::new(adapter))
        }
        None => {
            info!("OPENAI_API_KEY not set, running without a language model");
            Summarizer::offline()
        }
    };

    let pipeline = DigestPipeline::new(registry, Box::new(source), summarizer, &cli.digest_config());
    let report = pipeline.run().await.context("Digest was not published")?;

    info!(
        "Run complete in {:?}: {} feeds, {} collected, {} kept, {} rendered{} -> {}",
        start_time.elapsed(),
        report.feeds,
        report.collected,
        report.kept,
        report.rendered,
        if report.truncated { " (truncated)" } else { "" },
        report.output_path.display()
    );
    Ok(())
}
