use clap::Parser;
use page_extract::Extractor;
use page_extract::server;
use std::process::ExitCode;

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match args.command {
        Some(Command::Extract { url }) => extract_once(&config, &url).await,
        Some(Command::Serve { .. }) | None => server::serve(&config).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Extract a single page and print the record to stdout
async fn extract_once(
    config: &page_extract::config::ExtractorConfig,
    url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = Extractor::from_config(config)?;
    let start_time = std::time::Instant::now();

    let result = extractor.extract(url).await?;
    ::log::info!(
        "Extracted {} in {:.2} seconds",
        url,
        start_time.elapsed().as_secs_f64()
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
