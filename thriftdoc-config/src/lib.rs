//! Shared configuration loader for the thriftdoc toolchain.
//!
//! `defaults/thriftdoc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ThriftdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use thriftdoc_babel::TransformOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/thriftdoc.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "thriftdoc.toml";

/// Top-level configuration consumed by thriftdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ThriftdocConfig {
    pub render: RenderConfig,
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs exposed by the section builders.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub table_of_contents: bool,
    pub toc_marker: String,
    pub line_break_marker: String,
    pub comment_language: String,
}

impl From<RenderConfig> for TransformOptions {
    fn from(config: RenderConfig) -> Self {
        TransformOptions::from(&config)
    }
}

impl From<&RenderConfig> for TransformOptions {
    fn from(config: &RenderConfig) -> Self {
        TransformOptions {
            table_of_contents: config.table_of_contents,
            toc_marker: config.toc_marker.clone(),
            line_break_marker: config.line_break_marker.clone(),
            comment_language: config.comment_language.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Registry name of the output format
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ThriftdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ThriftdocConfig, ConfigError> {
    Loader::new().build()
}
