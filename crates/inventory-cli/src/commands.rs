use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use inventory_ingest::load_inventory;
use inventory_transform::{InventoryFrame, Operation, clean};

use crate::options::RunOptions;

/// Load and clean the inventory, run `operation` and render its JSON result.
///
/// Nothing is rendered unless every stage succeeds.
pub fn run_operation(operation: Operation, options: &RunOptions) -> Result<String> {
    let span = info_span!("run", operation = %operation, input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let data = load_inventory(&options.input)
        .with_context(|| format!("load inventory {}", options.input.display()))?;
    let frame = InventoryFrame::try_new(data).context("validate inventory columns")?;
    let cleaned = clean(&frame).context("clean inventory")?;
    info!(
        records = frame.record_count(),
        kept = cleaned.record_count(),
        "inventory ready"
    );

    let output = operation
        .run(&cleaned)
        .with_context(|| format!("run {operation}"))?;
    let rendered = output
        .to_json_string(options.pretty)
        .context("render output")?;

    info!(
        rows = output.row_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "operation complete"
    );
    Ok(rendered)
}
