use super::{Advice, FieldContext, Rule};

pub const LOW_NITROGEN: &str = "Nitrogen looks low → expect weaker growth if not corrected.";
pub const LOW_PHOSPHORUS: &str = "Phosphorus looks low → root development may be limited.";
pub const LOW_POTASSIUM: &str = "Potassium looks low → stress tolerance and quality may drop.";

/// Warn about each nutrient below its low threshold, in N, P, K order.
pub struct NutrientWarningRule;

impl Rule for NutrientWarningRule {
    fn id(&self) -> &'static str {
        "low_nutrients"
    }

    fn evaluate(&self, ctx: &FieldContext<'_>) -> Vec<Advice> {
        let sample = ctx.sample;
        let t = ctx.thresholds;

        [
            (sample.n < t.low_n, LOW_NITROGEN),
            (sample.p < t.low_p, LOW_PHOSPHORUS),
            (sample.k < t.low_k, LOW_POTASSIUM),
        ]
        .into_iter()
        .filter(|(low, _)| *low)
        .map(|(_, warning)| Advice::Message(warning.to_string()))
        .collect()
    }
}
