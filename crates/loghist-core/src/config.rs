//! Configuration types for loghist.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults,
//! `~/.config/loghist/config.toml` (or an explicit path), then `LOGHIST_*`
//! environment variables. The file is optional and never created.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::ReportOptions;
use crate::types::{ReportFormat, Strategy};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalize]
strategy    = "prefix"
passthrough = true

[report]
format    = "tsv"
top       = 0
min_count = 1
"#;

/// Environment prefix; `LOGHIST_REPORT__TOP=10` sets `report.top`.
const ENV_PREFIX: &str = "LOGHIST";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[normalize]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub strategy: Strategy,
    /// Echo `*`-prefixed lines (prefix strategy only).
    #[serde(default = "default_passthrough")]
    pub passthrough: bool,
}

fn default_passthrough() -> bool { true }

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            passthrough: default_passthrough(),
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    /// Maximum entries to print; 0 prints all.
    #[serde(default)]
    pub top: usize,
    #[serde(default = "default_min_count")]
    pub min_count: u64,
}

fn default_min_count() -> u64 { 1 }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            top: 0,
            min_count: default_min_count(),
        }
    }
}

impl ReportConfig {
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            format: self.format,
            top: (self.top > 0).then_some(self.top),
            min_count: self.min_count,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration.
    ///
    /// With `path = None` the per-user file is read if it exists. An explicit
    /// `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(?cfg, "configuration loaded");
        Ok(cfg)
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

/// Per-user config file location.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("loghist")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
