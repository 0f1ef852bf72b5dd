//! Application configuration.
//!
//! One option matters to the core: the invoice print width. Loaded from an
//! optional `registar.toml` plus `REGISTAR_`-prefixed environment
//! variables. Any load or parse failure is non-fatal: a warning is logged
//! and the defaults are retained.

use serde::Deserialize;
use tracing::warn;

fn default_width() -> usize {
    40
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub print: PrintConfig,
}

/// Invoice printing options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrintConfig {
    /// Header/summary line width in columns (`print.width`,
    /// `REGISTAR_PRINT__WIDTH`).
    #[serde(default = "default_width")]
    pub width: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            print: PrintConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults on any failure.
    ///
    /// Sources, later overriding earlier:
    /// 1. `registar.toml` (optional)
    /// 2. Environment variables: `REGISTAR_PRINT__WIDTH=60`
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "failed to load configuration, using defaults");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("registar").required(false))
            .add_source(
                config::Environment::with_prefix("REGISTAR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
