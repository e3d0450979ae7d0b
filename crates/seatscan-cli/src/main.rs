use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use seatscan_scraper::{run_pipeline, CatalogClient, PipelineOptions};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Debug, Parser)]
#[command(name = "seatscan")]
#[command(about = "Harvest library seating availability into CSV and map artifacts")]
struct Cli {
    /// Catalog category to harvest; defaults to the configured category
    /// (1 = libraries).
    #[arg(long)]
    category: Option<u32>,

    /// Output path for the tabular export.
    #[arg(long, default_value = "ile_de_france_libraries.csv")]
    csv_out: PathBuf,

    /// Output path for the interactive map.
    #[arg(long, default_value = "ile_de_france_libraries_map.html")]
    map_out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = seatscan_core::load_config_from_env()?;

    let filter = EnvFilter::try_from_env("SEATSCAN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = CatalogClient::new(&config)?;
    let options = PipelineOptions {
        category_id: cli.category.unwrap_or(config.category_id),
        inter_request_delay_ms: config.inter_request_delay_ms,
    };

    tracing::info!(category = options.category_id, "starting harvest");
    let records = run_pipeline(&client, &options).await?;
    tracing::info!(records = records.len(), "harvest complete");

    let csv = report::csv::render_csv(&records);
    std::fs::write(&cli.csv_out, csv)
        .with_context(|| format!("failed to write {}", cli.csv_out.display()))?;

    let map = report::map::render_map(&records, &config.site_page_base);
    std::fs::write(&cli.map_out, map)
        .with_context(|| format!("failed to write {}", cli.map_out.display()))?;

    println!("Done. Files created:");
    println!("  - {}", cli.csv_out.display());
    println!("  - {}", cli.map_out.display());

    Ok(())
}
