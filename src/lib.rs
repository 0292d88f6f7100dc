/*!
 * # subprose - subtitles to prose
 *
 * A Rust library for turning collections of subtitle files (and zip archives
 * of them) into readable documents.
 *
 * ## Features
 *
 * - Merge timestamped caption lines into sentence-terminated paragraphs
 * - Organize files, folders and archives into a heading hierarchy
 * - Deterministic, name-sorted output regardless of loading order
 * - Output as plain text, HTML, or HTML with Kindle page breaks
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `reflow`: Paragraph reflow of raw subtitle text
 * - `heading`: Display titles and per-format heading blocks
 * - `escape`: HTML escaping
 * - `document`: Tree building, sorting and rendering:
 *   - `document::tree`: The named node hierarchy
 *   - `document::render`: Depth-first document rendering
 * - `output_format`: Output format descriptor and conversion result
 * - `source`: Concurrent loading of files, folders and archives
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod escape;
pub mod file_utils;
pub mod heading;
pub mod output_format;
pub mod reflow;
pub mod source;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::{build_tree, convert, render, DocumentNode, RenderOptions};
pub use errors::{AppError, SourceError};
pub use escape::escape_html;
pub use heading::{display_title, heading};
pub use output_format::{ConversionOutput, OutputFormat};
pub use reflow::reflow;
pub use source::{SourceItem, SourceLoader};
