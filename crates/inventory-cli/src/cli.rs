//! CLI argument definitions for the bicycle inventory transformer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bicycle-inventory",
    version,
    about = "Clean and analyze a bicycle inventory",
    long_about = "Clean a bicycle inventory JSON file and print one analytical view as JSON.\n\n\
                  Records missing model_id, price_gbp, weight_kg or in_stock are dropped\n\
                  before the selected operation runs."
)]
pub struct Cli {
    /// Operation to run on the cleaned inventory.
    #[arg(value_enum, value_name = "FUNCTION")]
    pub operation: OperationArg,

    /// Inventory JSON file (default: bicycle_inventory.json next to the executable).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON result.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Operations selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    /// In-stock mountain bikes priced at 1000 GBP or more.
    Filter,
    /// Number of records per brand.
    #[value(name = "brand_count")]
    BrandCount,
    /// Model id, price and weight sorted by price then weight.
    Sort,
    /// Every record with price_per_kg added.
    #[value(name = "gbp_per_kg")]
    GbpPerKg,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_operation_names() {
        let cli = Cli::try_parse_from(["bicycle-inventory", "brand_count"]).unwrap();
        assert_eq!(cli.operation, OperationArg::BrandCount);
        let cli = Cli::try_parse_from(["bicycle-inventory", "gbp_per_kg", "--pretty"]).unwrap();
        assert_eq!(cli.operation, OperationArg::GbpPerKg);
        assert!(cli.pretty);
    }

    #[test]
    fn rejects_unknown_operation() {
        assert!(Cli::try_parse_from(["bicycle-inventory", "median"]).is_err());
        assert!(Cli::try_parse_from(["bicycle-inventory"]).is_err());
    }

    #[test]
    fn input_override() {
        let cli =
            Cli::try_parse_from(["bicycle-inventory", "sort", "--input", "stock.json"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("stock.json")));
    }
}
