//! Record counts grouped by brand.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use inventory_model::{BRAND, Result};

use crate::frame::CleanedInventory;

/// JSON key used for the group of records without a brand.
pub const MISSING_BRAND_KEY: &str = "null";

/// Number of records per exact brand value.
///
/// Records without a brand form their own group (keyed by `None`), so the
/// counts always add up to the number of records counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandCounts {
    counts: BTreeMap<Option<String>, u64>,
}

impl BrandCounts {
    /// Count for a brand; `None` looks up the missing-brand group.
    pub fn get(&self, brand: Option<&str>) -> Option<u64> {
        self.counts.get(&brand.map(str::to_string)).copied()
    }

    /// Number of distinct brand groups.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all group counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Groups ordered by brand, the missing-brand group first.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, u64)> {
        self.counts
            .iter()
            .map(|(brand, count)| (brand.as_deref(), *count))
    }

    /// True when a brand literally named [`MISSING_BRAND_KEY`] sits next to
    /// the missing-brand group, so both share one JSON key.
    pub fn has_key_collision(&self) -> bool {
        self.counts.contains_key(&None)
            && self.counts.contains_key(&Some(MISSING_BRAND_KEY.to_string()))
    }

    /// Groups as rendered in JSON. Colliding groups are summed under one key.
    fn json_entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = Vec::with_capacity(self.counts.len());
        for (brand, count) in self.iter() {
            let key = brand.unwrap_or(MISSING_BRAND_KEY);
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 += count,
                None => entries.push((key, count)),
            }
        }
        entries
    }
}

impl Serialize for BrandCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.json_entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, count) in entries {
            map.serialize_entry(key, &count)?;
        }
        map.end()
    }
}

/// Group the cleaned inventory by exact `brand` value and count each group.
pub fn count_by_brand(inventory: &CleanedInventory) -> Result<BrandCounts> {
    let brands = inventory.data().column(BRAND)?.str()?;
    let mut counts: BTreeMap<Option<String>, u64> = BTreeMap::new();
    for brand in brands {
        *counts.entry(brand.map(str::to_string)).or_insert(0) += 1;
    }
    debug!(groups = counts.len(), "counted brands");
    let counts = BrandCounts { counts };
    if counts.has_key_collision() {
        warn!(
            key = MISSING_BRAND_KEY,
            missing = counts.get(None).unwrap_or(0),
            named = counts.get(Some(MISSING_BRAND_KEY)).unwrap_or(0),
            "brand name matches the missing-brand key; JSON output merges both groups"
        );
    }
    Ok(counts)
}
