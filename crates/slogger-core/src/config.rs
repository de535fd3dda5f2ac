//! Configuration types for slogger.
//!
//! [`Config::load`] reads `~/.config/slogger/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::from_path`] reads an
//! explicit file. [`Config::defaults`] returns the defaults without touching
//! the filesystem (useful in tests). Every layer can be overridden from the
//! environment, e.g. `SLOGGER_SINK__KIND=stderr`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ParseSinkKindError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[sink]
kind   = "stdout"
path   = "slogger.json"
append = true

[record]
timestamps = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/slogger/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sink: SinkConfig,
    #[serde(default)]
    pub record: RecordConfig,
}

/// Where records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Stdout,
    Stderr,
    File,
}

impl std::str::FromStr for SinkKind {
    type Err = ParseSinkKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(SinkKind::Stdout),
            "stderr" => Ok(SinkKind::Stderr),
            "file" => Ok(SinkKind::File),
            _ => Err(ParseSinkKindError(s.to_string())),
        }
    }
}

/// `[sink]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SinkConfig {
    #[serde(default = "default_sink_kind")]
    pub kind: SinkKind,
    /// Target file when `kind = "file"`.
    #[serde(default = "default_sink_path")]
    pub path: PathBuf,
    /// Append to an existing file instead of truncating it.
    #[serde(default = "default_append")]
    pub append: bool,
}

fn default_sink_kind() -> SinkKind { SinkKind::Stdout }
fn default_sink_path() -> PathBuf { PathBuf::from("slogger.json") }
fn default_append() -> bool { true }

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: default_sink_kind(),
            path: default_sink_path(),
            append: default_append(),
        }
    }
}

/// `[record]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordConfig {
    #[serde(default = "default_timestamps")]
    pub timestamps: bool,
}

fn default_timestamps() -> bool { true }

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            timestamps: default_timestamps(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/slogger/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::from_path(&path)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .add_source(
                config::Environment::with_prefix("SLOGGER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("slogger")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
