mod history;
mod report;

use crate::config::OutputConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Writes run artifacts (history log, text reports) under one output directory.
pub struct OutputStore {
    dir: PathBuf,
    history_path: PathBuf,
}

impl OutputStore {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            history_path: config.dir.join(&config.history_file),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}
