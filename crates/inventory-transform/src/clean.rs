//! Removal of incomplete records.

use polars::prelude::{IntoLazy, col, lit};
use tracing::info;

use inventory_model::{REQUIRED_FIELDS, Result};

use crate::frame::{CleanedInventory, InventoryFrame};

/// Drop every record missing `model_id`, `price_gbp`, `weight_kg` or
/// `in_stock`, keeping the survivors in source order.
///
/// Incomplete records are not an error. `model_name`, `brand` and `type` may
/// still be missing afterwards.
pub fn clean(frame: &InventoryFrame) -> Result<CleanedInventory> {
    let complete = REQUIRED_FIELDS
        .iter()
        .fold(lit(true), |acc, name| acc.and(col(*name).is_not_null()));
    let data = frame.data.clone().lazy().filter(complete).collect()?;
    let dropped = frame.record_count().saturating_sub(data.height());
    info!(kept = data.height(), dropped, "cleaned inventory");
    Ok(CleanedInventory::new(InventoryFrame { data }, dropped))
}
