//! Reader for the flat-file hotel catalog consumed by the planning backend.
//!
//! Three shapes are accepted:
//! - grouped: `{"results": [{"county": .., "items": [..]}]}` (a raw fleet report)
//! - flat: `{"items": [..]}` where each item already carries `county`
//!   (a selection artifact)
//! - a bare JSON array of items
//!
//! Anything else flattens to an empty list.

use std::path::Path;

use serde_json::Value;

use crate::artifact::read_json;
use crate::ArtifactError;

/// Flattens any accepted catalog shape into one record per hotel.
///
/// In the grouped shape each item is stamped with its group's `county`,
/// overwriting any `county` the item already had.
#[must_use]
pub fn flatten_catalog(data: Value) -> Vec<Value> {
    match data {
        Value::Object(mut map) => {
            if let Some(results) = map.remove("results") {
                flatten_groups(results)
            } else if let Some(Value::Array(items)) = map.remove("items") {
                items
            } else {
                Vec::new()
            }
        }
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

fn flatten_groups(results: Value) -> Vec<Value> {
    let Value::Array(groups) = results else {
        return Vec::new();
    };

    let mut flattened = Vec::new();
    for group in groups {
        let Value::Object(mut group) = group else {
            continue;
        };
        let county = group.remove("county").unwrap_or(Value::Null);
        let Some(Value::Array(items)) = group.remove("items") else {
            continue;
        };
        for mut item in items {
            if let Value::Object(fields) = &mut item {
                fields.insert("county".to_string(), county.clone());
            }
            flattened.push(item);
        }
    }
    flattened
}

/// Loads and flattens a catalog file.
///
/// # Errors
///
/// Returns [`ArtifactError`] if the file cannot be read or is not JSON.
pub fn load_catalog(path: &Path) -> Result<Vec<Value>, ArtifactError> {
    let data: Value = read_json(path)?;
    Ok(flatten_catalog(data))
}

/// Records whose `county` equals `county` exactly. No spelling normalization
/// is applied; `臺北市` and `台北市` are different keys here.
#[must_use]
pub fn hotels_for_county<'a>(records: &'a [Value], county: &str) -> Vec<&'a Value> {
    records
        .iter()
        .filter(|r| r.get("county").and_then(Value::as_str) == Some(county))
        .collect()
}
