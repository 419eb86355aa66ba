use polars::prelude::{DataFrame, IntoLazy, col, lit};
use tracing::debug;

use inventory_model::{IN_STOCK, PRICE_GBP, Result, TYPE};

use crate::frame::CleanedInventory;

pub const MOUNTAIN_BIKE: &str = "Mountain Bike";
pub const MIN_PRICE_GBP: f64 = 1000.0;

/// Keep in-stock mountain bikes priced at £1000 or more, in original order
/// and with every field retained.
///
/// `type` must equal [`MOUNTAIN_BIKE`] exactly; a missing type never matches.
pub fn filter_mountain_bikes_over_1000(inventory: &CleanedInventory) -> Result<DataFrame> {
    let predicate = col(TYPE)
        .eq(lit(MOUNTAIN_BIKE))
        .and(col(PRICE_GBP).gt_eq(lit(MIN_PRICE_GBP)))
        .and(col(IN_STOCK).eq(lit(true)));
    let data = inventory.data().clone().lazy().filter(predicate).collect()?;
    debug!(matched = data.height(), of = inventory.record_count(), "filtered inventory");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::clean;
    use crate::frame::InventoryFrame;
    use inventory_model::{BRAND, MODEL_ID, MODEL_NAME, WEIGHT_KG};
    use polars::prelude::*;

    #[test]
    fn applies_all_three_conditions() {
        let df = df! {
            MODEL_ID => &[1i64, 2, 3, 4, 5, 6],
            MODEL_NAME => &[Some("Climber 500"), None, None, None, None, None],
            BRAND => &["HillMaster", "CycloX", "CycloX", "RoadFlex", "HillMaster", "CycloX"],
            TYPE => &[Some("Mountain Bike"), Some("Mountain Bike"), Some("Mountain Bike"), Some("Road Bike"), None, Some("mountain bike")],
            PRICE_GBP => &[1053.0, 1000.0, 1200.0, 1499.0, 2000.0, 1500.0],
            WEIGHT_KG => &[14.0, 15.0, 13.0, 7.5, 12.0, 14.0],
            IN_STOCK => &[true, true, false, true, true, true],
        }
        .unwrap();
        let cleaned = clean(&InventoryFrame::try_new(df).unwrap()).unwrap();

        let filtered = filter_mountain_bikes_over_1000(&cleaned).unwrap();
        let ids: Vec<Option<i64>> = filtered
            .column(MODEL_ID)
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        // The price bound is inclusive and the type match is case-sensitive.
        assert_eq!(ids, vec![Some(1), Some(2)]);
        assert_eq!(filtered.width(), 7);
    }
}
