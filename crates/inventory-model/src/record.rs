//! A single bicycle inventory record as it appears in the JSON source.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One inventory item.
///
/// Every field is optional at this level: the source may use `null` or omit a
/// key entirely. Cleaning decides which records are usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BicycleRecord {
    #[serde(default, deserialize_with = "deserialize_model_id")]
    pub model_id: Option<i64>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, rename = "type")]
    pub bike_type: Option<String>,
    #[serde(default)]
    pub price_gbp: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

impl BicycleRecord {
    /// Returns true when every field gating cleaning is present.
    pub fn is_complete(&self) -> bool {
        self.model_id.is_some()
            && self.price_gbp.is_some()
            && self.weight_kg.is_some()
            && self.in_stock.is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawModelId {
    Int(i64),
    Float(f64),
}

/// Accepts integral floats (`4.0`) since dataframe exports write an integer
/// column holding nulls as floats. Floats outside the `i64` range are rejected.
fn deserialize_model_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawModelId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawModelId::Int(value)) => Ok(Some(value)),
        Some(RawModelId::Float(value)) if is_integral_i64(value) => Ok(Some(value as i64)),
        Some(RawModelId::Float(value)) => Err(D::Error::custom(format!(
            "model_id must be an integer, got {value}"
        ))),
    }
}

/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn is_integral_i64(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
}
