use crate::error::{AdvisorError, Result};

pub fn parse_float(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        tracing::debug!(field, raw, "Rejected non-numeric input");
        AdvisorError::Validation {
            field,
            expected: "a number",
        }
    })
}

pub fn parse_int(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        tracing::debug!(field, raw, "Rejected non-integer input");
        AdvisorError::Validation {
            field,
            expected: "an integer",
        }
    })
}
