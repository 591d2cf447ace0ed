//! Settings struct with TOML-based sections.

use serde::{Deserialize, Serialize};

use crate::align::DEFAULT_GRID_MS;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Alignment arithmetic settings.
    #[serde(default)]
    pub align: AlignSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Path configuration for input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Output folder for aligned recordings.
    #[serde(default = "default_output_folder")]
    pub output_folder: String,

    /// Manual-sync filename looked for inside the data directory.
    #[serde(default = "default_sync_file")]
    pub sync_file: String,
}

fn default_output_folder() -> String {
    "aligned".to_string()
}

fn default_sync_file() -> String {
    "sync.txt".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_folder: default_output_folder(),
            sync_file: default_sync_file(),
        }
    }
}

/// Alignment arithmetic settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignSettings {
    /// Sampling-grid width the resolved offset is snapped to, in
    /// milliseconds. Matches the recorders' fixed cadence.
    #[serde(default = "default_grid_ms")]
    pub grid_ms: i64,
}

fn default_grid_ms() -> i64 {
    DEFAULT_GRID_MS
}

impl Default for AlignSettings {
    fn default() -> Self {
        Self {
            grid_ms: default_grid_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}
