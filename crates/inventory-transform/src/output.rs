//! Records-orientation JSON rendering of result tables.

use polars::prelude::DataFrame;
use serde_json::{Map, Value};

use inventory_ingest::any_to_json;
use inventory_model::Result;

/// Render a DataFrame as a JSON array with one object per row.
///
/// Keys follow column order. Missing values become `null`.
pub fn frame_to_records(df: &DataFrame) -> Result<Value> {
    let columns = df.get_columns();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Map::with_capacity(columns.len());
        for column in columns {
            row.insert(column.name().to_string(), any_to_json(column.get(idx)?));
        }
        rows.push(Value::Object(row));
    }
    Ok(Value::Array(rows))
}
