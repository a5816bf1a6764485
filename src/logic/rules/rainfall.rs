use super::{Advice, FieldContext, Rule};

pub const LOW_RAINFALL_TIP: &str =
    "Rainfall is low: plan irrigation, mulching, or drought-tolerant practices.";
pub const HIGH_RAINFALL_TIP: &str =
    "High rainfall: ensure drainage and monitor fungal disease risk.";
pub const MODERATE_RAINFALL_TIP: &str = "Rainfall seems moderate: keep basic moisture monitoring.";

/// Expected rainfall against the shared low/high thresholds. Emits one tip.
pub struct RainfallRule;

impl Rule for RainfallRule {
    fn id(&self) -> &'static str {
        "rainfall"
    }

    fn evaluate(&self, ctx: &FieldContext<'_>) -> Vec<Advice> {
        let rainfall = ctx.sample.rainfall_mm;
        let tip = if rainfall < ctx.thresholds.low_rainfall_mm {
            LOW_RAINFALL_TIP
        } else if rainfall > ctx.thresholds.high_rainfall_mm {
            HIGH_RAINFALL_TIP
        } else {
            MODERATE_RAINFALL_TIP
        };

        vec![Advice::Tip(tip.to_string())]
    }
}
