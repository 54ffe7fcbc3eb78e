use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

mod config;

use npmboard::sources::downloads::DownloadsSource;
use npmboard::sources::ecosystems::EcosystemsSource;
use npmboard::sources::registry::RegistrySource;
use npmboard::{BatchRunner, PackageEnricher, RequestLimiter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    info!("Starting npmboard worker in {:?} mode...", config.mode);

    let raw = fs::read_to_string(&config.input_file)
        .with_context(|| format!("failed to read {}", config.input_file))?;
    let names: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of package names", config.input_file))?;
    info!("Loaded {} package names from {}", names.len(), config.input_file);

    let client = Client::builder()
        .user_agent("npmboard-worker")
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    let enricher = PackageEnricher::new(
        RegistrySource::new(client.clone(), config.registry_url.clone()),
        EcosystemsSource::new(client.clone(), config.stats_url.clone()),
        DownloadsSource::new(client.clone(), config.downloads_url.clone()),
        RequestLimiter::new(config.max_concurrent_requests),
        config.mode.trend_window(),
        config.mode.week_alignment(),
    );
    let runner = BatchRunner::new(enricher);

    let started = Instant::now();
    let result = runner.run(&names).await;

    if let Some(parent) = Path::new(&config.output_file).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let output = serde_json::to_string_pretty(&result.records)?;
    fs::write(&config.output_file, output)
        .with_context(|| format!("failed to write {}", config.output_file))?;

    info!("Processing complete:");
    info!("  Total packages: {}", result.records.len());
    info!("  Successful: {}", result.successes);
    info!("  Failed: {}", result.failures);
    info!("  Results saved to: {}", config.output_file);
    info!("Total execution time: {:.2}s", started.elapsed().as_secs_f64());

    Ok(())
}
