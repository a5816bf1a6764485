use crate::error::{AdvisorError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_RULES_PATH: &str = "rules.json";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const DEFAULT_HISTORY_FILE: &str = "history.json";

const RULES_ENV: &str = "AGROADVISOR_RULES";
const OUTPUT_DIR_ENV: &str = "AGROADVISOR_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_rules_path")]
    pub rules_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where run artifacts go. Handed to the output store at construction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

fn default_rules_path() -> PathBuf {
    PathBuf::from(DEFAULT_RULES_PATH)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_history_file() -> String {
    DEFAULT_HISTORY_FILE.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            history_file: default_history_file(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_path: default_rules_path(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, standard locations are searched
    /// and built-in defaults are used when nothing is found.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(AdvisorError::Config(format!(
                    "Config file not found at {:?}",
                    p
                )));
            }
            Some(p) => p.clone(),
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        // Read and parse, substituting ${VAR} placeholders first
        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AdvisorError::Config(format!("Failed to read config: {}", e)))?;

        tracing::debug!(path = %config_path.display(), "Loaded config");
        Self::from_yaml_str(&config_str)
    }

    /// Parse a config document after `${VAR}` substitution.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);
        serde_yaml::from_str(&content)
            .map_err(|e| AdvisorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("agroadvisor").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/agroadvisor/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AdvisorError::Config("Cannot determine config directory".into()))?
            .join("agroadvisor");
        Ok(config_dir.join("config.yaml"))
    }

    /// Apply overrides: CLI flags first, then environment, then whatever was loaded.
    pub fn with_overrides(self, rules: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        self.with_overrides_from(rules, output_dir, |name| std::env::var(name).ok())
    }

    fn with_overrides_from<F>(
        mut self,
        rules: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        env: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |name: &str| {
            env(name)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        if let Some(path) = rules.or_else(|| from_env(RULES_ENV)) {
            self.rules_path = path;
        }
        if let Some(dir) = output_dir.or_else(|| from_env(OUTPUT_DIR_ENV)) {
            self.output.dir = dir;
        }
        self
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up the agro advisor.");
        println!();

        let rules_path: String = Input::new()
            .with_prompt("  Rules file")
            .default(DEFAULT_RULES_PATH.into())
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let output_dir: String = Input::new()
            .with_prompt("  Output directory")
            .default(DEFAULT_OUTPUT_DIR.into())
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let history_file: String = Input::new()
            .with_prompt("  History file name")
            .default(DEFAULT_HISTORY_FILE.into())
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            rules_path: PathBuf::from(rules_path),
            output: OutputConfig {
                dir: PathBuf::from(output_dir),
                history_file,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AdvisorError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# Agro Advisor Configuration\n# Generated by `agroadvisor init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
