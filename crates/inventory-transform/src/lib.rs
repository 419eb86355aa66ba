//! Cleaning and analytical views over the bicycle inventory.
//!
//! Every view consumes a [`CleanedInventory`], which only [`clean`] can
//! produce, so no downstream operation ever sees a record missing one of the
//! gating fields.

pub mod brand_count;
pub mod clean;
pub mod filter;
pub mod frame;
pub mod operation;
pub mod output;
pub mod price_per_kg;
pub mod sort;

pub use brand_count::{BrandCounts, count_by_brand};
pub use clean::clean;
pub use filter::filter_mountain_bikes_over_1000;
pub use frame::{CleanedInventory, InventoryFrame};
pub use operation::{Operation, OperationOutput};
pub use output::frame_to_records;
pub use price_per_kg::{PRICE_PER_KG, compute_price_per_weight};
pub use sort::sort_by_price_then_weight;
