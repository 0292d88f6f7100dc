use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::output_format::OutputFormat;

// @module: File and directory utilities

// @const: Output stem used when several inputs are merged
pub const MERGED_OUTPUT_STEM: &str = "subtitles";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @checks: Extension match, case-insensitive
    fn has_extension(path: &Path, extension: &str) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
    }

    /// Whether the path names an SRT subtitle file
    pub fn is_subtitle_file<P: AsRef<Path>>(path: P) -> bool {
        Self::has_extension(path.as_ref(), "srt")
    }

    /// Whether the path names a zip archive
    pub fn is_archive_file<P: AsRef<Path>>(path: P) -> bool {
        Self::has_extension(path.as_ref(), "zip")
    }

    // @generates: Output path for the merged document
    // @params: inputs, output_dir (defaults to first input's parent), format
    pub fn generate_output_path<P: AsRef<Path>>(
        inputs: &[P],
        output_dir: Option<&Path>,
        format: OutputFormat,
    ) -> PathBuf {
        let first = inputs.first().map(|p| p.as_ref());

        let stem = match (inputs.len(), first) {
            (1, Some(input)) if input.is_dir() => input
                .file_name()
                .map(|name| name.to_string_lossy().to_string()),
            (1, Some(input)) => input
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string()),
            _ => None,
        }
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| MERGED_OUTPUT_STEM.to_string());

        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => first
                .and_then(|input| input.parent())
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        dir.join(format!("{}.{}", stem, format.extension()))
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let extension = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && Self::has_extension(path, extension) {
                result.push(path.to_path_buf());
            }
        }

        Ok(result)
    }

    /// Find every subtitle file and archive below a directory
    pub fn find_sources<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut sources = Self::find_files(&dir, "srt")?;
        sources.extend(Self::find_files(&dir, "zip")?);
        Ok(sources)
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
