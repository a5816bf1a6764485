use super::{
    nutrients::NutrientWarningRule, ph::PhRule, rainfall::RainfallRule, Advice, FieldContext, Rule,
};
use crate::error::Result;
use crate::logic::calculations::adjust_nutrient;
use crate::models::{InputEcho, NpkEstimate, NutrientPlan, Recommendation, RuleTable, SoilSample};

pub const EXPLANATION: &str =
    "Rule-based estimate using base crop needs + simple thresholds. Verify with local soil test.";

pub struct AdvisoryEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl AdvisoryEngine {
    /// Rule order fixes the order of messages: pH first, then nutrient warnings.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(PhRule),
            Box::new(RainfallRule),
            Box::new(NutrientWarningRule),
        ];

        Self { rules }
    }

    /// Evaluate a soil sample against the rule table.
    ///
    /// Fails only when the crop is not in the table. Pure: the same sample and
    /// table always give an equal recommendation.
    pub fn evaluate(&self, sample: &SoilSample, table: &RuleTable) -> Result<Recommendation> {
        let (crop, crop_rule) = table.get(&sample.crop)?;
        let thresholds = &table.thresholds;

        let ctx = FieldContext {
            crop: &crop,
            crop_rule,
            thresholds,
            sample,
        };

        let mut messages = Vec::new();
        let mut tips = crop_rule.notes.clone();

        for rule in &self.rules {
            for advice in rule.evaluate(&ctx) {
                tracing::trace!(rule = rule.id(), ?advice, "Rule produced advice");
                match advice {
                    Advice::Message(m) => messages.push(m),
                    Advice::Tip(t) => tips.push(t),
                }
            }
        }

        let base = crop_rule.base_npk;
        let npk_estimate = NpkEstimate {
            n: adjust_nutrient(base.n, sample.n, thresholds.low_n),
            p: adjust_nutrient(base.p, sample.p, thresholds.low_p),
            k: adjust_nutrient(base.k, sample.k, thresholds.low_k),
        };

        tracing::debug!(crop = %crop, npk = %npk_estimate, "Computed recommendation");

        Ok(Recommendation {
            crop,
            inputs: InputEcho::from(sample),
            recommendation: NutrientPlan {
                npk_estimate,
                explain: EXPLANATION.to_string(),
            },
            messages,
            tips,
        })
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate with the default rule set.
pub fn recommend(sample: &SoilSample, table: &RuleTable) -> Result<Recommendation> {
    AdvisoryEngine::new().evaluate(sample, table)
}
