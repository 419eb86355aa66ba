//! The four analytical views selectable after cleaning.

use std::fmt;

use polars::prelude::DataFrame;
use serde_json::Value;
use tracing::{debug, info_span};

use inventory_model::Result;

use crate::brand_count::{BrandCounts, count_by_brand};
use crate::filter::filter_mountain_bikes_over_1000;
use crate::frame::CleanedInventory;
use crate::output::frame_to_records;
use crate::price_per_kg::compute_price_per_weight;
use crate::sort::sort_by_price_then_weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// In-stock mountain bikes at £1000 or more.
    Filter,
    /// Record count per brand.
    BrandCount,
    /// Sorted by price then weight, projected to id, price and weight.
    Sort,
    /// Every record with `price_per_kg` appended.
    GbpPerKg,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Filter,
        Operation::BrandCount,
        Operation::Sort,
        Operation::GbpPerKg,
    ];

    /// Command-line name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Filter => "filter",
            Operation::BrandCount => "brand_count",
            Operation::Sort => "sort",
            Operation::GbpPerKg => "gbp_per_kg",
        }
    }

    pub fn run(self, inventory: &CleanedInventory) -> Result<OperationOutput> {
        let span = info_span!("operation", name = self.name());
        let _guard = span.enter();
        let output = match self {
            Operation::Filter => {
                OperationOutput::Records(filter_mountain_bikes_over_1000(inventory)?)
            }
            Operation::BrandCount => OperationOutput::BrandCounts(count_by_brand(inventory)?),
            Operation::Sort => OperationOutput::Records(sort_by_price_then_weight(inventory)?),
            Operation::GbpPerKg => OperationOutput::Records(compute_price_per_weight(inventory)?),
        };
        debug!(rows = output.row_count(), "operation finished");
        Ok(output)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one operation, ready for JSON output.
#[derive(Debug, Clone)]
pub enum OperationOutput {
    /// A table, emitted in records orientation.
    Records(DataFrame),
    /// Brand counts, emitted as a JSON object.
    BrandCounts(BrandCounts),
}

impl OperationOutput {
    /// Rows in a table result, or groups in a brand count.
    pub fn row_count(&self) -> usize {
        match self {
            OperationOutput::Records(df) => df.height(),
            OperationOutput::BrandCounts(counts) => counts.len(),
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        match self {
            OperationOutput::Records(df) => frame_to_records(df),
            OperationOutput::BrandCounts(counts) => Ok(serde_json::to_value(counts)?),
        }
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let value = self.to_json()?;
        let rendered = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(rendered)
    }
}
