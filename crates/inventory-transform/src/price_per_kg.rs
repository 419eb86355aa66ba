//! Derived price-per-kilogram metric.

use polars::prelude::{DataFrame, IntoLazy, col};
use tracing::warn;

use inventory_model::{InventoryError, MODEL_ID, PRICE_GBP, Result, WEIGHT_KG};

use crate::frame::CleanedInventory;

/// Name of the derived column.
pub const PRICE_PER_KG: &str = "price_per_kg";

/// Append `price_per_kg = price_gbp / weight_kg` to every record.
///
/// Rows, order and the original columns are unchanged. A record weighing
/// exactly zero fails the whole operation with
/// [`InventoryError::DivisionByZero`]; no partial table is returned.
pub fn compute_price_per_weight(inventory: &CleanedInventory) -> Result<DataFrame> {
    if let Some(model_id) = first_weightless_model(inventory.data())? {
        warn!(model_id, "weight_kg is zero");
        return Err(InventoryError::DivisionByZero { model_id });
    }
    let data = inventory
        .data()
        .clone()
        .lazy()
        .with_column((col(PRICE_GBP) / col(WEIGHT_KG)).alias(PRICE_PER_KG))
        .collect()?;
    Ok(data)
}

fn first_weightless_model(data: &DataFrame) -> Result<Option<i64>> {
    let weights = data.column(WEIGHT_KG)?.f64()?;
    let ids = data.column(MODEL_ID)?.i64()?;
    for (weight, model_id) in weights.into_iter().zip(ids) {
        if weight == Some(0.0) {
            if let Some(model_id) = model_id {
                return Ok(Some(model_id));
            }
        }
    }
    Ok(None)
}
