use std::path::Path;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub export: ExportConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

/// What to do with a record whose items are malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Stop the whole batch at the first malformed record.
    Abort,
    /// Log the record, leave it out of the output and keep going.
    Skip,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Emit multi-line values as base64 blocks. Turning this off is only
    /// useful when reading the output by eye.
    pub base64: bool,
    pub on_malformed: MalformedPolicy,
}

/// Format of the contact file read by the batch driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    Json,
    Vcard,
}

impl InputFormat {
    /// ## Summary
    /// Guesses the input format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("vcf") || ext.eq_ignore_ascii_case("vcard") {
            Some(Self::Vcard)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Vcard => "vcard",
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub format: InputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export: ExportConfig {
                base64: true,
                on_malformed: MalformedPolicy::Abort,
            },
            input: InputConfig {
                format: InputFormat::Json,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional TOML file and
    /// environment variables. Environment variables take precedence over
    /// file values.
    ///
    /// When `file` is `None`, `rolodex.toml` in the working directory is
    /// used if it exists.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE).required(false),
        };

        Ok(Config::builder()
            .set_default("export.base64", true)?
            .set_default("export.on_malformed", "abort")?
            .set_default("input.format", "json")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(file_source)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from the environment, an optional `.env` file and an
/// optional config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(file)?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests;
