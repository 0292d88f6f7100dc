/*!
 * Loading of subtitle sources from files, folders and zip archives.
 *
 * Every input path is loaded by its own tokio task and archives are
 * decompressed on the blocking pool. All results are joined before the
 * document tree is built; the first failure aborts the whole run.
 */

use std::io::{Cursor, Read, Seek};
use std::path::{Component, Path, PathBuf};

use futures::future::try_join_all;
use indicatif::ProgressBar;
use log::{debug, warn};
use zip::ZipArchive;

use crate::errors::SourceError;
use crate::file_utils::FileManager;

// @const: Folder macOS adds to archives for resource forks
const MACOS_METADATA_DIR: &str = "__MACOSX";

/// A named textual input, optionally nested under container names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    /// File or archive-entry name, including extension
    pub name: String,

    /// Raw subtitle text; `None` for container-only items
    pub text: Option<String>,

    /// Ancestor container names, outermost first
    pub path_prefix: Vec<String>,
}

impl SourceItem {
    /// Create a top-level subtitle item
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            path_prefix: Vec::new(),
        }
    }

    /// Create a container-only item
    pub fn container(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            path_prefix: Vec::new(),
        }
    }

    /// Nest the item under the given containers
    pub fn with_prefix(mut self, path_prefix: Vec<String>) -> Self {
        self.path_prefix = path_prefix;
        self
    }
}

/// Decode subtitle bytes as UTF-8, replacing invalid sequences and dropping a BOM.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}

/// Read every `.srt` entry of a zip archive.
///
/// Entries are nested under `prefix + [archive_name] + entry folders`.
pub fn read_archive<R: Read + Seek>(
    archive_name: &str,
    reader: R,
    prefix: &[String],
) -> Result<Vec<SourceItem>, SourceError> {
    let archive_error = |e: zip::result::ZipError| SourceError::Archive {
        name: archive_name.to_string(),
        reason: e.to_string(),
    };

    let mut archive = ZipArchive::new(reader).map_err(archive_error)?;
    let mut base = prefix.to_vec();
    base.push(archive_name.to_string());

    let mut items = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(archive_error)?;
        if entry.is_dir() {
            continue;
        }

        let components = match entry.enclosed_name().and_then(|_| entry_components(entry.name())) {
            Some(components) => components,
            None => {
                warn!("Skipping unsafe archive entry '{}' in {}", entry.name(), archive_name);
                continue;
            }
        };

        let Some((file_name, folders)) = components.split_last() else {
            continue;
        };

        if folders.first().is_some_and(|dir| dir == MACOS_METADATA_DIR) || file_name.starts_with("._") {
            continue;
        }
        if !FileManager::is_subtitle_file(file_name) {
            debug!("Skipping non-subtitle entry '{}' in {}", entry.name(), archive_name);
            continue;
        }

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).map_err(|source| SourceError::Read {
            name: format!("{}/{}", archive_name, entry.name()),
            source,
        })?;

        let mut path_prefix = base.clone();
        path_prefix.extend(folders.iter().cloned());
        items.push(SourceItem::new(file_name.clone(), decode_text(&bytes)).with_prefix(path_prefix));
    }

    debug!("Read {} subtitle file(s) from archive {}", items.len(), archive_name);
    Ok(items)
}

// @returns: Entry folders and file name, accepting both `/` and `\\` separators
fn entry_components(entry_name: &str) -> Option<Vec<String>> {
    let mut components = Vec::new();
    for part in entry_name.split(['/', '\\']) {
        match part {
            "" | "." => continue,
            ".." => return None,
            _ => components.push(part.to_string()),
        }
    }
    Some(components)
}

// @returns: Normal path components as owned strings
fn path_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect()
}

// @returns: Last path component as a display name
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Loads input paths concurrently into source items
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    // @field: Ticked once per finished input path
    progress: Option<ProgressBar>,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report each finished input on the given progress bar
    pub fn with_progress(progress: ProgressBar) -> Self {
        Self { progress: Some(progress) }
    }

    /// Load all inputs, one task per path, failing on the first error.
    ///
    /// Items come back in input order, so a later input wins a duplicate
    /// leaf name regardless of which task finished first.
    pub async fn load_all(&self, paths: &[PathBuf]) -> Result<Vec<SourceItem>, SourceError> {
        let tasks = paths.iter().cloned().map(|path| {
            let progress = self.progress.clone();
            let handle = tokio::spawn(async move {
                let result = Self::load_path(path).await;
                if let Some(progress) = progress {
                    progress.inc(1);
                }
                result
            });
            async move {
                handle
                    .await
                    .map_err(|e| SourceError::Task(e.to_string()))?
            }
        });

        let loaded = try_join_all(tasks).await?;
        Ok(loaded.into_iter().flatten().collect())
    }

    /// Load a single explicitly given path: subtitle, archive or directory
    pub async fn load_path(path: PathBuf) -> Result<Vec<SourceItem>, SourceError> {
        let metadata = tokio::fs::metadata(&path).await.map_err(|source| SourceError::Read {
            name: path.display().to_string(),
            source,
        })?;

        if metadata.is_dir() {
            return Self::load_directory(path).await;
        }

        if !FileManager::is_subtitle_file(&path) && !FileManager::is_archive_file(&path) {
            return Err(SourceError::Unsupported { name: path.display().to_string() });
        }

        Self::load_file(path, Vec::new()).await
    }

    // @loads: Every subtitle and archive below a directory, nested by relative folder
    async fn load_directory(dir: PathBuf) -> Result<Vec<SourceItem>, SourceError> {
        let scan_dir = dir.clone();
        let files = tokio::task::spawn_blocking(move || FileManager::find_sources(&scan_dir))
            .await
            .map_err(|e| SourceError::Task(e.to_string()))?
            .map_err(|e| SourceError::Directory {
                name: dir.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!("Found {} source file(s) in {:?}", files.len(), dir);

        let loads = files.into_iter().map(|file| {
            let folders = file
                .parent()
                .and_then(|parent| parent.strip_prefix(&dir).ok())
                .map(path_components)
                .unwrap_or_default();
            Self::load_file(file, folders)
        });

        let loaded = try_join_all(loads).await?;
        Ok(loaded.into_iter().flatten().collect())
    }

    // @loads: One subtitle file or archive under the given prefix
    async fn load_file(path: PathBuf, prefix: Vec<String>) -> Result<Vec<SourceItem>, SourceError> {
        let name = file_name_of(&path);
        let bytes = tokio::fs::read(&path).await.map_err(|source| SourceError::Read {
            name: path.display().to_string(),
            source,
        })?;

        if FileManager::is_archive_file(&path) {
            return tokio::task::spawn_blocking(move || read_archive(&name, Cursor::new(bytes), &prefix))
                .await
                .map_err(|e| SourceError::Task(e.to_string()))?;
        }

        debug!("Loaded {} ({} bytes)", name, bytes.len());
        Ok(vec![SourceItem::new(name, decode_text(&bytes)).with_prefix(prefix)])
    }
}
