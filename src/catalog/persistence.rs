use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{CatFoodError, Result};
use crate::models::FoodItem;

/// Load catalog items from a JSON array or a CSV file with a header row.
///
/// The format follows the file extension (`.csv`, otherwise JSON).
/// Deduplicates by lowercase id; the last occurrence wins but keeps the
/// position of the first. Invalid items are skipped.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let items = if is_csv(path) {
        read_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str::<Vec<FoodItem>>(&content)?
    };

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<FoodItem> = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_valid() {
            tracing::warn!(item = %item.debug_string(), "Skipped invalid catalog item");
            continue;
        }
        let key = item.key();
        if let Some(&i) = positions.get(&key) {
            deduped[i] = item;
        } else {
            positions.insert(key, deduped.len());
            deduped.push(item);
        }
    }

    if deduped.is_empty() {
        return Err(CatFoodError::InvalidInput(format!(
            "catalog file {} holds no valid items",
            path.display()
        )));
    }

    tracing::info!(path = %path.display(), items = deduped.len(), "Loaded catalog");
    Ok(deduped)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn read_csv(path: &Path) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    for record in reader.deserialize() {
        items.push(record?);
    }
    Ok(items)
}
