/*!
 * Heading formatting for tree nodes.
 *
 * A raw source name such as `My Show Subtitles.srt` is cleaned into a display
 * title (`My Show`) and rendered as a heading whose level is the node depth.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape::escape_html;
use crate::output_format::OutputFormat;

// @const: Trailing subtitle or archive extension
static EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(srt|zip)$").expect("valid extension regex")
});

// @const: Trailing "subtitle"/"subtitles" word
static SUBTITLE_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(^|\s+)subtitles?\s*$").expect("valid subtitle word regex")
});

// @const: Kindle page break emitted before top-level headings
pub const KINDLE_PAGE_BREAK: &str = "<mbp:pagebreak />";

// @const: Deepest heading level HTML provides
const MAX_HTML_LEVEL: usize = 6;

/// Derive the display title from a raw file, folder or archive name.
///
/// A name that is nothing but the "subtitles" word keeps that word, and a name
/// that is nothing but an extension keeps the raw name, so a title is never
/// emptied by cleaning.
pub fn display_title(raw_name: &str) -> String {
    let without_extension = EXTENSION_REGEX.replace(raw_name, "");
    let cleaned = SUBTITLE_WORD_REGEX.replace(&without_extension, "");
    let cleaned = cleaned.trim();

    if !cleaned.is_empty() {
        cleaned.to_string()
    } else if !without_extension.trim().is_empty() {
        without_extension.trim().to_string()
    } else {
        raw_name.trim().to_string()
    }
}

/// Render the heading block for a node named `raw_name` at `depth`.
///
/// `depth` is the literal heading level: children of the root are depth 1.
pub fn heading(raw_name: &str, depth: usize, format: OutputFormat) -> String {
    let title = display_title(raw_name);

    match format {
        OutputFormat::Plain => plain_heading(&title, depth),
        OutputFormat::Html => html_heading(&title, depth),
        OutputFormat::HtmlKindle => {
            let block = html_heading(&title, depth);
            if depth <= 1 {
                format!("{}\n{}", KINDLE_PAGE_BREAK, block)
            } else {
                block
            }
        }
    }
}

fn plain_heading(title: &str, depth: usize) -> String {
    if depth < 3 {
        let underline_char = if depth == 1 { '=' } else { '-' };
        let underline: String = std::iter::repeat_n(underline_char, title.chars().count()).collect();
        format!("{}\n{}\n", title, underline)
    } else {
        format!("{} {}\n", "#".repeat(depth), title)
    }
}

fn html_heading(title: &str, depth: usize) -> String {
    let level = depth.clamp(1, MAX_HTML_LEVEL);
    format!("<h{level}>{}</h{level}>", escape_html(title))
}
