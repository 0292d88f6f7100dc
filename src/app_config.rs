use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::document::RenderOptions;
use crate::output_format::OutputFormat;

/// Application configuration module
/// This module handles loading and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Output document settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output document settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Produce HTML instead of plain text
    #[serde(default)]
    pub html: bool,

    /// Produce e-reader friendly HTML (implies `html`)
    #[serde(default)]
    pub kindle: bool,

    /// Title of the HTML document (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load a configuration file, falling back to defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found at '{}', using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.output.title {
            if title.trim().is_empty() {
                return Err(anyhow!("Document title must not be empty"));
            }
            if title.contains(['\n', '\r']) {
                return Err(anyhow!("Document title must be a single line"));
            }
        }

        Ok(())
    }

    /// Output format selected by the html/kindle flags
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.output.html, self.output.kindle)
    }

    /// Render options derived from the output settings
    pub fn render_options(&self) -> RenderOptions {
        let options = RenderOptions::new(self.output_format());
        match &self.output.title {
            Some(title) => options.with_title(title.clone()),
            None => options,
        }
    }
}
