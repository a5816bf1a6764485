use super::OutputStore;
use crate::error::Result;
use crate::models::Recommendation;
use crate::ui::RecommendationSummary;
use chrono::{DateTime, Local};
use std::path::PathBuf;

pub const REPORT_TITLE: &str = "AGRO ADVISORY PROTOTYPE (Rule-based)";
pub const DISCLAIMER: &str =
    "Disclaimer: Prototype advice only. Confirm with local agronomist/soil test.";

impl OutputStore {
    /// Write a plain-text report named after the crop and time. Returns its path.
    pub fn write_report(
        &self,
        recommendation: &Recommendation,
        at: DateTime<Local>,
    ) -> Result<PathBuf> {
        self.ensure_dir()?;

        let file_name = format!(
            "recommendation_{}_{}.txt",
            file_safe(&recommendation.crop),
            at.format("%Y%m%d_%H%M%S")
        );
        let path = self.dir.join(file_name);

        std::fs::write(&path, render_report(recommendation))?;
        tracing::debug!(path = %path.display(), "Report written");

        Ok(path)
    }
}

pub fn render_report(recommendation: &Recommendation) -> String {
    let mut lines = vec![REPORT_TITLE.to_string(), "-".repeat(45)];
    lines.extend(
        RecommendationSummary::new(recommendation)
            .with_explanation(true)
            .lines(),
    );
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}

fn file_safe(crop: &str) -> String {
    crop.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::store::tests::{fixed_time, maize_recommendation};

    #[test]
    fn report_file_is_named_by_crop_and_time() {
        let tmp = tempfile::tempdir().unwrap();
        let store = OutputStore::new(&OutputConfig {
            dir: tmp.path().join("reports"),
            history_file: "history.json".into(),
        });

        let path = store
            .write_report(&maize_recommendation(), fixed_time())
            .unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "recommendation_maize_20261016_093005.txt"
        );
        assert!(path.starts_with(tmp.path().join("reports")));
    }

    #[test]
    fn report_contains_summary_and_disclaimer() {
        let text = render_report(&maize_recommendation());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], REPORT_TITLE);
        assert_eq!(lines[1], "-".repeat(45));
        assert_eq!(lines[2], "Crop: maize");
        assert!(text.contains("Estimated NPK: N=132 P=60 K=40"));
        assert!(text.contains("Rule-based estimate"));
        assert!(text.contains("Messages:\n- Soil pH (5.0) is LOW"));
        assert_eq!(lines.last(), Some(&DISCLAIMER));
    }

    #[test]
    fn file_safe_replaces_separators() {
        assert_eq!(file_safe("sweet potato"), "sweet_potato");
        assert_eq!(file_safe("../maize"), "___maize");
        assert_eq!(file_safe("tef-2"), "tef-2");
    }
}
