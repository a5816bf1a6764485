use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Closed interval of soil pH a crop prefers. Serialized as `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PhRange {
    pub low: f64,
    pub high: f64,
}

impl From<[f64; 2]> for PhRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PhRange> for [f64; 2] {
    fn from(range: PhRange) -> Self {
        [range.low, range.high]
    }
}

/// Baseline nutrient need of a crop. Serialized as `[N, P, K]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct BaseNpk {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl From<[f64; 3]> for BaseNpk {
    fn from([n, p, k]: [f64; 3]) -> Self {
        Self { n, p, k }
    }
}

impl From<BaseNpk> for [f64; 3] {
    fn from(base: BaseNpk) -> Self {
        [base.n, base.p, base.k]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CropRule {
    pub ideal_ph: PhRange,
    pub base_npk: BaseNpk,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Thresholds {
    pub low_rainfall_mm: i64,
    pub high_rainfall_mm: i64,
    pub low_n: f64,
    pub low_p: f64,
    pub low_k: f64,
}

/// Per-crop ideal ranges plus the thresholds shared by every crop.
///
/// Keys are expected in lowercase; lookups normalize the caller's input
/// (trim + lowercase) and match exactly.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RuleTable {
    pub crops: BTreeMap<String, CropRule>,
    pub thresholds: Thresholds,
}

impl RuleTable {
    /// Load a rule document. `.yaml`/`.yml` files are read as YAML,
    /// anything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AdvisorError::Rules(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_lowercase().as_str(), "yaml" | "yml"))
            .unwrap_or(false);

        let parsed = if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        };
        let table = parsed.map_err(|e| {
            AdvisorError::Rules(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            crops = table.crops.len(),
            "Loaded rule table"
        );

        Ok(table)
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Known crop keys, sorted ascending.
    pub fn crop_keys(&self) -> Vec<String> {
        self.crops.keys().cloned().collect()
    }

    /// Look up a crop by its normalized key. Returns the normalized key alongside the rule.
    pub fn get(&self, crop: &str) -> Result<(String, &CropRule)> {
        let key = normalize_crop_key(crop);
        match self.crops.get(&key) {
            Some(rule) => Ok((key, rule)),
            None => Err(AdvisorError::UnknownCrop {
                crop: crop.to_string(),
                known: self.crop_keys(),
            }),
        }
    }
}

pub fn normalize_crop_key(crop: &str) -> String {
    crop.trim().to_lowercase()
}
