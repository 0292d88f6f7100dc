use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::output_format::ConversionOutput;
use crate::source::SourceLoader;

// @module: Application controller for subtitle conversion

/// Main application controller: load sources, convert, write the document
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().map_err(|e| AppError::Config(e.to_string()))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load every input and render them into a single document
    pub async fn convert(&self, inputs: &[PathBuf]) -> Result<ConversionOutput> {
        let start_time = std::time::Instant::now();

        let progress = Self::create_progress_bar(inputs.len() as u64);
        let loader = SourceLoader::with_progress(progress.clone());
        let loaded = loader.load_all(inputs).await;
        progress.finish_and_clear();

        let sources = loaded.context("Failed to load subtitle sources")?;
        if sources.is_empty() {
            warn!("No subtitle files found in the given inputs");
        }

        let output = document::convert(&sources, &self.config.render_options());

        info!(
            "Converted {} subtitle file(s) to {} in {}",
            sources.len(),
            output.format,
            Self::format_duration(start_time.elapsed())
        );

        Ok(output)
    }

    /// Convert the inputs and write the result, returning the written path
    pub async fn run(&self, inputs: &[PathBuf], output: Option<PathBuf>, force_overwrite: bool) -> Result<PathBuf> {
        if inputs.is_empty() {
            return Err(anyhow!("At least one input path is required"));
        }

        for input in inputs {
            if !input.exists() {
                return Err(AppError::File(format!("Input path does not exist: {:?}", input)).into());
            }
        }

        let format = self.config.output_format();
        let output_path = match output {
            Some(path) if path.is_dir() => FileManager::generate_output_path(inputs, Some(&path), format),
            Some(path) => path,
            None => FileManager::generate_output_path(inputs, None, format),
        };

        if output_path.exists() && !force_overwrite {
            return Err(anyhow!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output_path
            ));
        }

        let converted = self.convert(inputs).await?;
        FileManager::write_to_file(&output_path, &converted.content)?;

        info!("Success: {}", Self::display_path(&output_path));
        Ok(output_path)
    }

    fn create_progress_bar(total: u64) -> ProgressBar {
        let progress = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} sources")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        progress.set_style(style);
        progress
    }

    fn display_path(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    /// Format a duration as a short human-readable string
    pub fn format_duration(duration: std::time::Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            format!("{}ms", millis)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
