pub mod json_source;
pub mod polars_utils;

pub use json_source::{load_inventory, parse_inventory_json, records_to_frame};
pub use polars_utils::{any_to_f64, any_to_i64, any_to_json};
