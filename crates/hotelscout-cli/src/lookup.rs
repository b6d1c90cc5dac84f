//! `lookup` command: filter a previously written catalog by county.

use std::path::Path;

use anyhow::Context;
use hotelscout_core::{hotels_for_county, load_catalog};

use crate::LookupArgs;

pub(crate) fn run_lookup(args: &LookupArgs) -> anyhow::Result<()> {
    let rendered = lookup_json(&args.input, &args.county)?;
    println!("{rendered}");
    Ok(())
}

/// Loads `input` in any accepted catalog shape and renders the records for
/// `county` as a pretty JSON array.
pub(crate) fn lookup_json(input: &Path, county: &str) -> anyhow::Result<String> {
    let records = load_catalog(input)
        .with_context(|| format!("failed to load catalog {}", input.display()))?;
    let matches = hotels_for_county(&records, county);
    tracing::info!(
        county,
        records = records.len(),
        matched = matches.len(),
        "catalog lookup"
    );
    if matches.is_empty() {
        tracing::warn!(county, "no hotels recorded for county");
    }
    serde_json::to_string_pretty(&matches).context("failed to render lookup result")
}
