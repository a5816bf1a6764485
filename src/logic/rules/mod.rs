pub mod engine;
pub mod nutrients;
pub mod ph;
pub mod rainfall;

pub use engine::recommend;

use crate::models::{CropRule, SoilSample, Thresholds};

/// A single piece of advice produced by a rule.
///
/// Messages are diagnostic statements about the sample; tips are practices to follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    Message(String),
    Tip(String),
}

/// Everything a rule may look at for one evaluation.
pub struct FieldContext<'a> {
    /// Normalized crop key
    pub crop: &'a str,
    pub crop_rule: &'a CropRule,
    pub thresholds: &'a Thresholds,
    pub sample: &'a SoilSample,
}

/// Trait for advisory rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Evaluate the rule, returning advice in the order it should be shown
    fn evaluate(&self, ctx: &FieldContext<'_>) -> Vec<Advice>;
}
