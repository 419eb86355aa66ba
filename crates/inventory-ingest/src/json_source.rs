//! Loading the inventory from a records-oriented JSON file.
//!
//! The source is a JSON array of objects, one per bicycle. Missing values are
//! `null` or an absent key. Records are parsed into [`BicycleRecord`] first and
//! then laid out as a polars [`DataFrame`] with a fixed schema:
//!
//! | column       | dtype     |
//! |--------------|-----------|
//! | `model_id`   | `Int64`   |
//! | `model_name` | `String`  |
//! | `brand`      | `String`  |
//! | `type`       | `String`  |
//! | `price_gbp`  | `Float64` |
//! | `weight_kg`  | `Float64` |
//! | `in_stock`   | `Boolean` |

use std::path::Path;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use inventory_model::{
    BRAND, BicycleRecord, IN_STOCK, InventoryError, MODEL_ID, MODEL_NAME, PRICE_GBP,
    REQUIRED_FIELDS, Result, TYPE, WEIGHT_KG,
};

/// Read, parse and lay out the inventory file at `path`.
pub fn load_inventory(path: &Path) -> Result<DataFrame> {
    let text = std::fs::read_to_string(path).map_err(|source| InventoryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_inventory_json(&text)?;
    debug!(path = %path.display(), records = records.len(), "loaded inventory");
    records_to_frame(&records)
}

/// Parse records-oriented JSON into inventory records.
///
/// A non-empty source must mention each field that gates cleaning in at least
/// one record; a column that is absent everywhere means the file is not an
/// inventory export.
pub fn parse_inventory_json(text: &str) -> Result<Vec<BicycleRecord>> {
    let root: Value = serde_json::from_str(text)
        .map_err(|err| InventoryError::malformed(format!("invalid JSON: {err}")))?;
    let rows = root
        .as_array()
        .ok_or_else(|| InventoryError::malformed("expected a top-level JSON array"))?;

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        if !row.is_object() {
            return Err(InventoryError::malformed(format!(
                "row {idx} is not a JSON object"
            )));
        }
        let record = BicycleRecord::deserialize(row)
            .map_err(|err| InventoryError::malformed(format!("row {idx}: {err}")))?;
        records.push(record);
    }

    if !rows.is_empty() {
        for field in REQUIRED_FIELDS {
            let present = rows
                .iter()
                .filter_map(Value::as_object)
                .any(|row| row.contains_key(field));
            if !present {
                return Err(InventoryError::malformed(format!(
                    "field '{field}' is missing from every record"
                )));
            }
        }
    }

    Ok(records)
}

/// Lay records out as a [`DataFrame`] in source order.
pub fn records_to_frame(records: &[BicycleRecord]) -> Result<DataFrame> {
    let model_ids: Vec<Option<i64>> = records.iter().map(|r| r.model_id).collect();
    let model_names: Vec<Option<String>> = records.iter().map(|r| r.model_name.clone()).collect();
    let brands: Vec<Option<String>> = records.iter().map(|r| r.brand.clone()).collect();
    let types: Vec<Option<String>> = records.iter().map(|r| r.bike_type.clone()).collect();
    let prices: Vec<Option<f64>> = records.iter().map(|r| r.price_gbp).collect();
    let weights: Vec<Option<f64>> = records.iter().map(|r| r.weight_kg).collect();
    let stock: Vec<Option<bool>> = records.iter().map(|r| r.in_stock).collect();

    let columns: Vec<Column> = vec![
        Series::new(MODEL_ID.into(), model_ids).into_column(),
        Series::new(MODEL_NAME.into(), model_names).into_column(),
        Series::new(BRAND.into(), brands).into_column(),
        Series::new(TYPE.into(), types).into_column(),
        Series::new(PRICE_GBP.into(), prices).into_column(),
        Series::new(WEIGHT_KG.into(), weights).into_column(),
        Series::new(IN_STOCK.into(), stock).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}
