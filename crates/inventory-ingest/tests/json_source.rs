use std::fs;
use std::path::PathBuf;

use inventory_ingest::load_inventory;
use inventory_model::{BRAND, InventoryError, MODEL_ID, PRICE_GBP};
use tempfile::TempDir;

fn write_inventory(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("bicycle_inventory.json");
    fs::write(&path, contents).expect("write inventory");
    path
}

#[test]
fn loads_rows_in_source_order() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_inventory(
        &dir,
        r#"[
            {"model_id": 1.0, "brand": "CycloX", "type": "Road Bike", "price_gbp": 936, "weight_kg": 13.5, "in_stock": true},
            {"model_id": null, "brand": "SpeedRacer", "type": "Road Bike", "price_gbp": 2496, "weight_kg": 8.0, "in_stock": false},
            {"model_id": 1.0, "brand": null, "type": "Road Bike", "price_gbp": null, "weight_kg": 7.8, "in_stock": false}
        ]"#,
    );

    let df = load_inventory(&path).expect("load inventory");
    assert_eq!(df.height(), 3);

    let ids: Vec<Option<i64>> = df
        .column(MODEL_ID)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    // Duplicate ids are kept as-is.
    assert_eq!(ids, vec![Some(1), None, Some(1)]);

    let brands: Vec<Option<&str>> = df.column(BRAND).unwrap().str().unwrap().into_iter().collect();
    assert_eq!(brands, vec![Some("CycloX"), Some("SpeedRacer"), None]);

    let prices: Vec<Option<f64>> = df
        .column(PRICE_GBP)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(prices, vec![Some(936.0), Some(2496.0), None]);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_inventory(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, InventoryError::FileRead { .. }));
}

#[test]
fn invalid_json_is_malformed() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_inventory(&dir, "[{\"model_id\": 1,");
    let err = load_inventory(&path).unwrap_err();
    assert!(matches!(err, InventoryError::MalformedInput { .. }));
}
