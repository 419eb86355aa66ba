//! Run configuration resolved from command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

/// File name of the inventory looked up next to the executable.
pub const DEFAULT_INPUT_FILE: &str = "bicycle_inventory.json";

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Inventory JSON file to load.
    pub input: PathBuf,
    /// Pretty-print the JSON result.
    pub pretty: bool,
}

impl RunOptions {
    /// Use `input` when given, otherwise [`default_input_path`].
    pub fn resolve(input: Option<PathBuf>, pretty: bool) -> Result<Self> {
        let input = match input {
            Some(path) => path,
            None => default_input_path()?,
        };
        Ok(Self { input, pretty })
    }
}

/// `bicycle_inventory.json` in the directory holding the running executable.
pub fn default_input_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate executable")?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow!("executable {} has no parent directory", exe.display()))?;
    Ok(dir.join(DEFAULT_INPUT_FILE))
}
