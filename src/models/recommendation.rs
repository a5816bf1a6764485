use crate::error::Result;
use crate::logic::calculations::round_to;
use crate::logic::validation::{parse_float, parse_int};
use serde::{Deserialize, Serialize};

/// One soil test plus expected rainfall for a crop.
#[derive(Debug, Clone, PartialEq)]
pub struct SoilSample {
    pub crop: String,
    pub ph: f64,
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub rainfall_mm: i64,
}

impl SoilSample {
    /// Parse raw argument strings in the order ph, n, p, k, rainfall,
    /// stopping at the first field that fails.
    pub fn from_raw(
        crop: &str,
        ph: &str,
        n: &str,
        p: &str,
        k: &str,
        rainfall: &str,
    ) -> Result<Self> {
        Ok(Self {
            crop: crop.to_string(),
            ph: parse_float("ph", ph)?,
            n: parse_float("n", n)?,
            p: parse_float("p", p)?,
            k: parse_float("k", k)?,
            rainfall_mm: parse_int("rainfall", rainfall)?,
        })
    }
}

/// Inputs as echoed back in a recommendation, soil values rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEcho {
    pub soil_ph: f64,
    pub soil_n: f64,
    pub soil_p: f64,
    pub soil_k: f64,
    pub rainfall_mm: i64,
}

impl From<&SoilSample> for InputEcho {
    fn from(sample: &SoilSample) -> Self {
        Self {
            soil_ph: round_to(sample.ph, 2),
            soil_n: round_to(sample.n, 2),
            soil_p: round_to(sample.p, 2),
            soil_k: round_to(sample.k, 2),
            rainfall_mm: sample.rainfall_mm,
        }
    }
}

impl std::fmt::Display for InputEcho {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pH={:.2} N={:.2} P={:.2} K={:.2} rainfall={}mm",
            self.soil_ph, self.soil_n, self.soil_p, self.soil_k, self.rainfall_mm
        )
    }
}

/// Estimated nutrient application. Serialized as `[N, P, K]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 3]", into = "[i64; 3]")]
pub struct NpkEstimate {
    pub n: i64,
    pub p: i64,
    pub k: i64,
}

impl From<[i64; 3]> for NpkEstimate {
    fn from([n, p, k]: [i64; 3]) -> Self {
        Self { n, p, k }
    }
}

impl From<NpkEstimate> for [i64; 3] {
    fn from(npk: NpkEstimate) -> Self {
        [npk.n, npk.p, npk.k]
    }
}

impl std::fmt::Display for NpkEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N={} P={} K={}", self.n, self.p, self.k)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientPlan {
    pub npk_estimate: NpkEstimate,
    pub explain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop: String,
    pub inputs: InputEcho,
    pub recommendation: NutrientPlan,
    pub messages: Vec<String>,
    pub tips: Vec<String>,
}

impl Recommendation {
    pub fn npk(&self) -> NpkEstimate {
        self.recommendation.npk_estimate
    }
}

/// A recommendation as stored in the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    #[test]
    fn from_raw_parses_all_fields() {
        let sample = SoilSample::from_raw("maize", "6.2", " 20 ", "1e1", "-3", "500").unwrap();
        assert_eq!(sample.ph, 6.2);
        assert_eq!(sample.n, 20.0);
        assert_eq!(sample.p, 10.0);
        assert_eq!(sample.k, -3.0);
        assert_eq!(sample.rainfall_mm, 500);
    }

    #[test]
    fn from_raw_stops_at_first_bad_field() {
        let err = SoilSample::from_raw("maize", "6.2", "lots", "x", "1", "1").unwrap_err();
        assert!(matches!(err, AdvisorError::Validation { field: "n", .. }));
    }

    #[test]
    fn rainfall_must_be_integer() {
        let err = SoilSample::from_raw("maize", "6", "1", "1", "1", "500.5").unwrap_err();
        assert_eq!(err.to_string(), "rainfall must be an integer.");
    }

    #[test]
    fn input_echo_rounds_to_two_decimals() {
        let sample = SoilSample {
            crop: "maize".into(),
            ph: 6.456,
            n: 20.0,
            p: 33.333,
            k: 0.1,
            rainfall_mm: 750,
        };
        let echo = InputEcho::from(&sample);
        assert_eq!(echo.soil_ph, 6.46);
        assert_eq!(echo.soil_p, 33.33);
        assert_eq!(echo.rainfall_mm, 750);
        assert_eq!(
            echo.to_string(),
            "pH=6.46 N=20.00 P=33.33 K=0.10 rainfall=750mm"
        );
    }

    #[test]
    fn npk_serializes_as_array() {
        let npk = NpkEstimate {
            n: 132,
            p: 60,
            k: 40,
        };
        assert_eq!(serde_json::to_string(&npk).unwrap(), "[132,60,40]");
        assert_eq!(npk.to_string(), "N=132 P=60 K=40");
    }

    #[test]
    fn history_entry_flattens_with_timestamp() {
        let entry = HistoryEntry {
            recommendation: Recommendation {
                crop: "maize".into(),
                inputs: InputEcho {
                    soil_ph: 5.0,
                    soil_n: 20.0,
                    soil_p: 50.0,
                    soil_k: 45.0,
                    rainfall_mm: 500,
                },
                recommendation: NutrientPlan {
                    npk_estimate: NpkEstimate {
                        n: 132,
                        p: 60,
                        k: 40,
                    },
                    explain: "x".into(),
                },
                messages: vec![],
                tips: vec![],
            },
            timestamp: "2026-10-16T09:30:00".into(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["crop"], "maize");
        assert_eq!(value["timestamp"], "2026-10-16T09:30:00");
        assert_eq!(value["recommendation"]["npk_estimate"][0], 132);
        assert_eq!(value["inputs"]["rainfall_mm"], 500);
    }
}
