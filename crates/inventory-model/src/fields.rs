//! Column names of the bicycle inventory table.
//!
//! The names double as JSON keys on input and output, so they follow the
//! source data's snake_case spelling rather than Rust naming.

pub const MODEL_ID: &str = "model_id";
pub const MODEL_NAME: &str = "model_name";
pub const BRAND: &str = "brand";
pub const TYPE: &str = "type";
pub const PRICE_GBP: &str = "price_gbp";
pub const WEIGHT_KG: &str = "weight_kg";
pub const IN_STOCK: &str = "in_stock";

/// Fields a record must carry to survive cleaning.
pub const REQUIRED_FIELDS: [&str; 4] = [MODEL_ID, PRICE_GBP, WEIGHT_KG, IN_STOCK];

/// Every field in source column order.
pub const ALL_FIELDS: [&str; 7] = [
    MODEL_ID, MODEL_NAME, BRAND, TYPE, PRICE_GBP, WEIGHT_KG, IN_STOCK,
];
