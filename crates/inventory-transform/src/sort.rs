use polars::prelude::{DataFrame, IntoLazy, SortMultipleOptions, col};

use inventory_model::{MODEL_ID, PRICE_GBP, Result, WEIGHT_KG};

use crate::frame::CleanedInventory;

/// Sort ascending by `price_gbp`, then `weight_kg`, projecting to
/// `model_id`, `price_gbp` and `weight_kg`.
///
/// The sort is stable: records tied on both keys keep their source order.
pub fn sort_by_price_then_weight(inventory: &CleanedInventory) -> Result<DataFrame> {
    let data = inventory
        .data()
        .clone()
        .lazy()
        .sort_by_exprs(
            [col(PRICE_GBP), col(WEIGHT_KG)],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .select([col(MODEL_ID), col(PRICE_GBP), col(WEIGHT_KG)])
        .collect()?;
    Ok(data)
}
