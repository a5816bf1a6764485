use super::{Advice, FieldContext, Rule};

/// Soil pH against the crop's ideal range.
///
/// Always produces exactly one message. The range is inclusive on both ends:
/// - pH below the range: suggest liming
/// - pH above the range: suggest organic matter / sulfur
/// - otherwise: within range
pub struct PhRule;

impl Rule for PhRule {
    fn id(&self) -> &'static str {
        "soil_ph"
    }

    fn evaluate(&self, ctx: &FieldContext<'_>) -> Vec<Advice> {
        let ph = ctx.sample.ph;
        let range = ctx.crop_rule.ideal_ph;

        let message = if ph < range.low {
            format!(
                "Soil pH ({:.1}) is LOW for {}. Consider liming (after soil test).",
                ph, ctx.crop
            )
        } else if ph > range.high {
            format!(
                "Soil pH ({:.1}) is HIGH for {}. Consider organic matter / sulfur guidance (after soil test).",
                ph, ctx.crop
            )
        } else {
            format!("Soil pH ({:.1}) is within ideal range for {}.", ph, ctx.crop)
        };

        vec![Advice::Message(message)]
    }
}
