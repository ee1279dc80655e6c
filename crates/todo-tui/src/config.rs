/*
[INPUT]:  Built-in defaults, optional YAML file, TODO_TUI_* environment variables
[OUTPUT]: Parsed and validated TUI configuration
[POS]:    Configuration layer - presentation settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "TODO_TUI";
const APP_DIR: &str = "todo-tui";
const CONFIG_FILE: &str = "config.yaml";

/// Top-level configuration for the to-do TUI
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Heading shown above the input row
    pub title: String,
    /// Placeholder shown in the empty input row
    pub placeholder: String,
    /// Interval between UI ticks in milliseconds
    pub tick_rate_ms: u64,
    /// Number of ticks a toast stays on screen
    pub toast_ticks: u16,
    /// Show the log panel at startup
    pub show_logs: bool,
    /// Lines kept in the in-memory log buffer
    pub log_buffer_capacity: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            title: "ToDo Application".to_string(),
            placeholder: "Add a new task".to_string(),
            tick_rate_ms: 250,
            toast_ticks: 12,
            show_logs: false,
            log_buffer_capacity: 2000,
        }
    }
}

impl TuiConfig {
    /// Load configuration layered as defaults, file, environment.
    ///
    /// An explicit `path` must exist; the per-user default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path)
                        .format(FileFormat::Yaml)
                        .required(true),
                );
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    builder = builder.add_source(
                        File::from(default_path)
                            .format(FileFormat::Yaml)
                            .required(false),
                    );
                }
            }
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config: Self = builder
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(anyhow!("tick_rate_ms must be greater than zero"));
        }
        if self.toast_ticks == 0 {
            return Err(anyhow!("toast_ticks must be greater than zero"));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize configuration")
    }
}

/// `<config dir>/todo-tui/config.yaml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
