pub mod error;
pub mod fields;
pub mod record;

pub use error::{InventoryError, Result};
pub use fields::{
    ALL_FIELDS, BRAND, IN_STOCK, MODEL_ID, MODEL_NAME, PRICE_GBP, REQUIRED_FIELDS, TYPE,
    WEIGHT_KG,
};
pub use record::BicycleRecord;
