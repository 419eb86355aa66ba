//! Exit codes and output streams of the `bicycle-inventory` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const INVENTORY: &str = r#"[
    {"model_id":4,"model_name":"Climber 500","brand":"HillMaster","type":"Mountain Bike","price_gbp":1053,"weight_kg":14.0,"in_stock":true},
    {"model_id":5,"model_name":"City Cruiser","brand":"UrbanRide","type":"Hybrid Bike","price_gbp":468,"weight_kg":11.5,"in_stock":true}
]"#;

const ZERO_WEIGHT: &str = r#"[
    {"model_id":1,"price_gbp":1053,"weight_kg":14.0,"in_stock":true},
    {"model_id":2,"price_gbp":500,"weight_kg":0,"in_stock":true}
]"#;

fn bicycle_inventory(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bicycle-inventory"))
        .args(args)
        .args(["--color", "never"])
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn bicycle-inventory")
}

fn run_on(operation: &str, contents: &str) -> Output {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("bicycle_inventory.json");
    fs::write(&input, contents).expect("write inventory");
    bicycle_inventory(&[operation, "--input", path_str(&input)])
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn success_prints_json_and_exits_zero() {
    let output = run_on("sort", INVENTORY);
    assert_eq!(output.status.code(), Some(0));
    let value: Value = serde_json::from_slice(&output.stdout).expect("JSON on stdout");
    let ids: Vec<i64> = value
        .as_array()
        .expect("records")
        .iter()
        .filter_map(|row| row["model_id"].as_i64())
        .collect();
    assert_eq!(ids, vec![5, 4]);
}

#[test]
fn brand_count_prints_object() {
    let output = run_on("brand_count", INVENTORY);
    assert_eq!(output.status.code(), Some(0));
    let value: Value = serde_json::from_slice(&output.stdout).expect("JSON on stdout");
    assert_eq!(value, serde_json::json!({"HillMaster": 1, "UrbanRide": 1}));
}

#[test]
fn zero_weight_exits_one_with_empty_stdout() {
    let output = run_on("gbp_per_kg", ZERO_WEIGHT);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("model_id 2"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_exits_one_with_empty_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.json");
    let output = bicycle_inventory(&["filter", "--input", path_str(&missing)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

#[test]
fn unknown_operation_is_a_usage_error() {
    let output = bicycle_inventory(&["median"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
