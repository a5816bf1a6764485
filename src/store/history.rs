use super::OutputStore;
use crate::error::Result;
use crate::models::{HistoryEntry, Recommendation};
use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::{debug, warn};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// History recovery rule.
///
/// The history log must be a JSON array. Anything else (invalid JSON, an object,
/// a scalar) is treated as an empty history and will be overwritten on the next
/// append. Entries of a valid array are kept verbatim, key order included.
///
/// Non-standard tokens such as `NaN` or `Infinity` make the document invalid
/// JSON, so a log containing them is discarded as a whole.
pub fn recover_history(content: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            warn!(
                kind = json_kind(&other),
                "History file is not a JSON array, starting a new history"
            );
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, "History file is not valid JSON, starting a new history");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl OutputStore {
    /// Existing history entries. Missing or unreadable files count as empty.
    pub fn load_history(&self) -> Vec<Value> {
        match std::fs::read_to_string(&self.history_path) {
            Ok(content) => recover_history(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.history_path.display(), "No history file yet");
                Vec::new()
            }
            Err(e) => {
                warn!(
                    path = %self.history_path.display(),
                    error = %e,
                    "History file unreadable, starting a new history"
                );
                Vec::new()
            }
        }
    }

    /// Append a timestamped snapshot of `recommendation` to the history log.
    /// Returns the number of entries now in the log.
    pub fn append_history(
        &self,
        recommendation: &Recommendation,
        at: DateTime<Local>,
    ) -> Result<usize> {
        self.ensure_dir()?;

        let mut history = self.load_history();
        let entry = HistoryEntry {
            recommendation: recommendation.clone(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        };
        history.push(serde_json::to_value(&entry)?);

        let json = serde_json::to_string_pretty(&history)?;
        std::fs::write(&self.history_path, json)?;

        debug!(
            path = %self.history_path.display(),
            entries = history.len(),
            "History updated"
        );
        Ok(history.len())
    }
}
