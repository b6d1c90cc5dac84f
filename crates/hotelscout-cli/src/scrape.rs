//! `scrape` command: fleet run, selection, artifact write, summary.

use std::path::Path;

use anyhow::Context;
use hotelscout_core::{
    default_targets, load_destinations, select_exact_total, write_json_atomic, AppConfig,
    DestinationTarget, FleetReport, SelectionResult,
};
use hotelscout_scraper::{run_fleet, FleetOptions, TripClient};

use crate::ScrapeArgs;

/// Runs the full scrape and writes its outputs.
///
/// Per-destination failures end up in the artifact's `skipped` list; only
/// setup problems and write failures are returned as errors.
pub(crate) async fn run_scrape(config: &AppConfig, args: &ScrapeArgs) -> anyhow::Result<()> {
    let targets = resolve_targets(args.destinations.as_deref())?;
    let client = TripClient::new(config).context("failed to build listing-site client")?;

    tracing::info!(
        destinations = targets.len(),
        max_hotels_per_city = args.max_hotels_per_city,
        detail_workers = args.detail_workers,
        target_total = args.target_total,
        base_url = %config.base_url,
        "starting scrape"
    );

    let options = FleetOptions {
        max_hotels_per_city: args.max_hotels_per_city,
        detail_workers: args.detail_workers,
    };
    let report = run_fleet(&client, &targets, options).await;
    let selection = select_exact_total(&report, args.target_total);

    write_json_atomic(&args.output, &selection)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!(
        path = %args.output.display(),
        selected = selection.actual_total,
        "wrote selection"
    );

    if let Some(raw_path) = &args.raw_output {
        write_json_atomic(raw_path, &report)
            .with_context(|| format!("failed to write {}", raw_path.display()))?;
        tracing::info!(path = %raw_path.display(), "wrote raw fleet report");
    }

    for line in summary_lines(&args.output, &report, &selection) {
        println!("{line}");
    }
    Ok(())
}

/// Destinations from `path`, or the built-in table when none is given.
pub(crate) fn resolve_targets(path: Option<&Path>) -> anyhow::Result<Vec<DestinationTarget>> {
    match path {
        Some(path) => {
            let file = load_destinations(path)
                .with_context(|| format!("failed to load destinations from {}", path.display()))?;
            Ok(file.into_targets())
        }
        None => Ok(default_targets()),
    }
}

pub(crate) fn summary_lines(
    output: &Path,
    report: &FleetReport,
    selection: &SelectionResult,
) -> [String; 4] {
    [
        format!("done: {}", output.display()),
        format!(
            "cities scraped: {}, hotels(raw): {}",
            report.total_cities_scraped, report.total_hotels
        ),
        format!(
            "selected: {}, counties included: {}",
            selection.actual_total,
            selection.unique_counties_included.len()
        ),
        format!("skipped: {}", selection.skipped.len()),
    ]
}
