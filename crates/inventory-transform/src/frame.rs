//! Inventory frame types.
//!
//! [`InventoryFrame`] wraps a polars DataFrame holding the seven inventory
//! columns with their expected dtypes. [`CleanedInventory`] is the same frame
//! after cleaning; it cannot be built any other way.

use polars::prelude::{DataFrame, DataType};

use inventory_model::{
    BRAND, IN_STOCK, InventoryError, MODEL_ID, MODEL_NAME, PRICE_GBP, Result, TYPE, WEIGHT_KG,
};

fn inventory_schema() -> [(&'static str, DataType); 7] {
    [
        (MODEL_ID, DataType::Int64),
        (MODEL_NAME, DataType::String),
        (BRAND, DataType::String),
        (TYPE, DataType::String),
        (PRICE_GBP, DataType::Float64),
        (WEIGHT_KG, DataType::Float64),
        (IN_STOCK, DataType::Boolean),
    ]
}

/// A raw inventory table, in source order.
#[derive(Debug, Clone)]
pub struct InventoryFrame {
    /// The inventory contents as a Polars DataFrame.
    pub data: DataFrame,
}

impl InventoryFrame {
    /// Wrap a DataFrame, casting each inventory column to its expected dtype.
    ///
    /// Fails when any of the seven inventory columns is absent.
    pub fn try_new(mut data: DataFrame) -> Result<Self> {
        for (name, dtype) in inventory_schema() {
            let column = data.column(name).map_err(|_| {
                InventoryError::malformed(format!("column '{name}' not found"))
            })?;
            if column.dtype() != &dtype {
                let cast = column.cast(&dtype)?;
                data.with_column(cast)?;
            }
        }
        Ok(Self { data })
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// An inventory frame in which every record has `model_id`, `price_gbp`,
/// `weight_kg` and `in_stock`.
#[derive(Debug, Clone)]
pub struct CleanedInventory {
    frame: InventoryFrame,
    dropped: usize,
}

impl CleanedInventory {
    pub(crate) fn new(frame: InventoryFrame, dropped: usize) -> Self {
        Self { frame, dropped }
    }

    pub fn data(&self) -> &DataFrame {
        &self.frame.data
    }

    pub fn as_frame(&self) -> &InventoryFrame {
        &self.frame
    }

    pub fn record_count(&self) -> usize {
        self.frame.record_count()
    }

    /// Number of records cleaning removed.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn casts_integer_prices_to_float() {
        let df = df! {
            MODEL_ID => &[1i64, 2],
            MODEL_NAME => &[Some("Climber 500"), None],
            BRAND => &["HillMaster", "CycloX"],
            TYPE => &["Mountain Bike", "Road Bike"],
            PRICE_GBP => &[1053i64, 936],
            WEIGHT_KG => &[14.0, 13.5],
            IN_STOCK => &[true, false],
        }
        .unwrap();

        let frame = InventoryFrame::try_new(df).unwrap();
        assert_eq!(frame.record_count(), 2);
        assert_eq!(
            frame.data.column(PRICE_GBP).unwrap().dtype(),
            &DataType::Float64
        );
    }

    #[test]
    fn rejects_frame_without_inventory_columns() {
        let df = df! {
            MODEL_ID => &[1i64],
        }
        .unwrap();

        let err = InventoryFrame::try_new(df).unwrap_err();
        assert!(err.to_string().contains(MODEL_NAME));
    }
}
