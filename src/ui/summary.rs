use crate::models::{Recommendation, RuleTable};
use std::fmt;

/// Human-readable rendering of a recommendation, shared by stdout and the text report.
pub struct RecommendationSummary<'a> {
    pub recommendation: &'a Recommendation,
    pub show_explanation: bool,
}

impl<'a> RecommendationSummary<'a> {
    pub fn new(recommendation: &'a Recommendation) -> Self {
        Self {
            recommendation,
            show_explanation: false,
        }
    }

    pub fn with_explanation(mut self, show: bool) -> Self {
        self.show_explanation = show;
        self
    }

    pub fn lines(&self) -> Vec<String> {
        let rec = self.recommendation;
        let mut lines = vec![
            format!("Crop: {}", rec.crop),
            format!("Inputs: {}", rec.inputs),
            format!("Estimated NPK: {}", rec.npk()),
        ];

        if self.show_explanation {
            lines.push(rec.recommendation.explain.clone());
        }

        lines.push(String::new());
        lines.push("Messages:".into());
        lines.extend(rec.messages.iter().map(|m| format!("- {}", m)));

        lines.push(String::new());
        lines.push("Tips:".into());
        lines.extend(rec.tips.iter().map(|t| format!("- {}", t)));

        lines
    }
}

impl fmt::Display for RecommendationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Table of crops in a rule document, one per line.
pub struct CropListing<'a> {
    pub table: &'a RuleTable,
}

impl<'a> CropListing<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }
}

impl fmt::Display for CropListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:>11}  {:>15}", "CROP", "IDEAL PH", "BASE N/P/K")?;
        for (key, rule) in &self.table.crops {
            let npk = format!(
                "{}/{}/{}",
                rule.base_npk.n, rule.base_npk.p, rule.base_npk.k
            );
            writeln!(
                f,
                "{:<12} {:>4.1} - {:<4.1}  {:>15}",
                key, rule.ideal_ph.low, rule.ideal_ph.high, npk
            )?;
        }
        write!(
            f,
            "Rainfall: low < {}mm, high > {}mm",
            self.table.thresholds.low_rainfall_mm, self.table.thresholds.high_rainfall_mm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::recommend;
    use crate::models::rules::tests::sample_table;
    use crate::models::SoilSample;

    fn maize_recommendation() -> Recommendation {
        let sample = SoilSample {
            crop: "maize".into(),
            ph: 5.0,
            n: 20.0,
            p: 50.0,
            k: 45.0,
            rainfall_mm: 500,
        };
        recommend(&sample, &sample_table()).unwrap()
    }

    #[test]
    fn summary_has_sections_in_order() {
        let rec = maize_recommendation();
        let lines = RecommendationSummary::new(&rec).lines();

        assert_eq!(lines[0], "Crop: maize");
        assert_eq!(
            lines[1],
            "Inputs: pH=5.00 N=20.00 P=50.00 K=45.00 rainfall=500mm"
        );
        assert_eq!(lines[2], "Estimated NPK: N=132 P=60 K=40");

        let messages = lines.iter().position(|l| l == "Messages:").unwrap();
        let tips = lines.iter().position(|l| l == "Tips:").unwrap();
        assert!(messages < tips);
        assert!(lines[messages + 1].starts_with("- Soil pH (5.0) is LOW"));
        assert_eq!(lines.len(), tips + 1 + rec.tips.len());
    }

    #[test]
    fn explanation_is_optional() {
        let rec = maize_recommendation();
        let plain = RecommendationSummary::new(&rec).to_string();
        let explained = RecommendationSummary::new(&rec)
            .with_explanation(true)
            .to_string();
        assert!(!plain.contains("Rule-based estimate"));
        assert!(explained.contains("Rule-based estimate"));
    }

    #[test]
    fn crop_listing_shows_every_crop() {
        let table = sample_table();
        let listing = CropListing::new(&table).to_string();
        for key in table.crop_keys() {
            assert!(listing.contains(&key));
        }
        assert!(listing.contains("120/60/40"));
        assert!(listing.ends_with("Rainfall: low < 400mm, high > 1200mm"));
    }
}
