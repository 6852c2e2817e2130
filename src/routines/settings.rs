use config::Config as eConfig;
use eyre::{bail, Result, WrapErr};
use serde_derive::{Deserialize, Serialize};

use crate::routines::output::OutputFile;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Settings for an analysis run
///
/// Read from a TOML file with [read_settings], any value can be overridden with an
/// `INFLAMMATION_<SECTION>_<KEY>` environment variable.
#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Settings {
    pub paths: Paths,
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Paths {
    /// Comma-delimited inflammation data, one patient per line
    pub data: String,
    /// Folder for the summary files and the log file
    #[serde(default = "default_output")]
    pub output: String,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Analysis {
    /// Readings strictly above this value are flagged
    #[serde(default)]
    pub threshold: f64,
    /// Row of the patient to flag, if any
    pub patient: Option<usize>,
}

impl Default for Analysis {
    fn default() -> Self {
        Analysis {
            threshold: 0.0,
            patient: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_true")]
    pub write: bool,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: default_log_level(),
            file: default_log_file(),
            write: default_true(),
        }
    }
}

impl Settings {
    /// Default settings for the given data file
    pub fn new(data: impl Into<String>) -> Self {
        Settings {
            paths: Paths {
                data: data.into(),
                output: default_output(),
            },
            analysis: Analysis::default(),
            log: Log::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.analysis.threshold.is_finite() {
            bail!("Threshold must be finite, got {}", self.analysis.threshold);
        }
        let level = self.log.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            bail!(
                "Unknown log level '{}', expected one of {:?}",
                self.log.level,
                LOG_LEVELS
            );
        }
        Ok(())
    }

    /// Write the settings as JSON to the output folder
    pub fn write(&self) -> Result<()> {
        let serialized =
            serde_json::to_string_pretty(self).wrap_err("Failed to serialize settings")?;
        let outputfile = OutputFile::new(&self.paths.output, "settings.json")?;
        std::io::Write::write_all(&mut outputfile.file_owned(), serialized.as_bytes())
            .wrap_err("Failed to write settings")?;
        Ok(())
    }
}

/// Read and validate settings from a TOML file, with environment overrides
pub fn read_settings(path: &str) -> Result<Settings> {
    let parsed = eConfig::builder()
        .add_source(config::File::with_name(path).format(config::FileFormat::Toml))
        .add_source(config::Environment::with_prefix("INFLAMMATION").separator("_"))
        .build()
        .wrap_err_with(|| format!("Failed to read settings from {}", path))?;

    let settings: Settings = parsed
        .try_deserialize()
        .wrap_err("Failed to parse settings")?;
    settings.validate()?;
    Ok(settings)
}

// *********************************
// Default values for deserializing
// *********************************
fn default_true() -> bool {
    true
}

fn default_output() -> String {
    "outputs/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "inflammation.log".to_string()
}
