use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Application settings for the command-line front end.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub output: OutputFormat,
    /// Draws per `pick` when `--count` is not given.
    pub default_count: i64,
    /// Team count for `teams --mode count` when `--value` is not given.
    pub default_teams: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            output: OutputFormat::default(),
            default_count: 1,
            default_teams: 2,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// `PICKER_` prefix, `__` between nested keys.
fn env_source() -> config::Environment {
    config::Environment::with_prefix("PICKER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Defaults, then `random_picker.toml` (or `path`), then `PICKER_*` variables.
    ///
    /// Nested keys use a double underscore: `PICKER_LOGGING__LEVEL=debug`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name("random_picker").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(env_source())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Settings from a TOML document alone, without touching the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
