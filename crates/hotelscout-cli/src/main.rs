mod logging;
mod lookup;
mod scrape;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::logging::LogLevel;

#[derive(Debug, Parser)]
#[command(name = "hotelscout")]
#[command(about = "Scrape hotel listings for every Taiwan county into a balanced sample")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape all destinations and write the selection artifact
    Scrape(ScrapeArgs),
    /// Print the hotels recorded for one county in an existing output file
    Lookup(LookupArgs),
}

#[derive(Debug, Args)]
struct ScrapeArgs {
    /// Where to write the selection artifact
    #[arg(long, default_value = "trip_hotels_taiwan_all_counties.json")]
    output: PathBuf,

    /// Upper bound on hotels parsed per destination
    #[arg(long, default_value_t = 10)]
    max_hotels_per_city: usize,

    /// Concurrent detail-page requests per destination
    #[arg(long, default_value_t = 5)]
    detail_workers: usize,

    /// Number of hotels to keep in the artifact
    #[arg(long, default_value_t = 200)]
    target_total: usize,

    #[arg(long, default_value = "trip_taiwan_scraper.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// YAML destination table replacing the built-in one
    #[arg(long)]
    destinations: Option<PathBuf>,

    /// Also write the full per-destination report here
    #[arg(long)]
    raw_output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct LookupArgs {
    /// Selection artifact, raw report, or bare list of records
    #[arg(long, default_value = "trip_hotels_taiwan_all_counties.json")]
    input: PathBuf,

    /// County name, matched exactly
    #[arg(long)]
    county: String,

    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Warning)]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape(args) => {
            let _guard = logging::init(args.log_level, Some(&args.log_file))?;
            let config =
                hotelscout_core::load_app_config().context("failed to load configuration")?;
            scrape::run_scrape(&config, &args).await
        }
        Commands::Lookup(args) => {
            let _guard = logging::init(args.log_level, None)?;
            lookup::run_lookup(&args)
        }
    }
}
