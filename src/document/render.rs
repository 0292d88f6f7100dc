/*!
 * Depth-first rendering of a sorted document tree.
 *
 * The root contributes no heading; its children are rendered at depth 1 and
 * every further level adds one. Output fragments are collected in order and
 * joined once at the end.
 */

use crate::document::tree::DocumentNode;
use crate::escape::escape_html;
use crate::heading::heading;
use crate::output_format::OutputFormat;
use crate::reflow::reflow;

// @const: Title used for the HTML shell when none is configured
pub const DEFAULT_TITLE: &str = "Subtitles";

const HTML_STYLE: &str = "body { font-family: Georgia, serif; max-width: 40em; margin: 2em auto; padding: 0 1em; line-height: 1.6; }
h1, h2, h3, h4, h5, h6 { font-family: Helvetica, Arial, sans-serif; line-height: 1.2; }
p { margin: 0 0 1em; }";

const KINDLE_STYLE: &str = "body { margin: 0; padding: 0; }
h1 { page-break-before: always; margin: 0 0 0.8em; font-size: 1.4em; }
h2, h3, h4, h5, h6 { margin: 1em 0 0.5em; font-size: 1.1em; }
p { margin: 0; text-indent: 1.2em; text-align: justify; }";

/// Options controlling how a tree is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output flavour
    pub format: OutputFormat,

    /// Document title for the HTML shell
    pub title: Option<String>,
}

impl RenderOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self { format, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Render a (sorted) tree into a single document string.
///
/// An empty tree renders to an empty string for plain output and to an HTML
/// shell with an empty body otherwise.
pub fn render(tree: &DocumentNode, options: &RenderOptions) -> String {
    let mut parts = Vec::new();
    collect_parts(tree, 0, options.format, &mut parts);
    let body = parts.join("\n");

    if options.format.is_html() {
        let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);
        html_shell(&body, title, options.format)
    } else {
        body
    }
}

fn collect_parts(node: &DocumentNode, depth: usize, format: OutputFormat, parts: &mut Vec<String>) {
    if let Some(name) = &node.name {
        let block = heading(name, depth, format);
        // Plain headings end in a newline, paragraph blocks do not
        let after_paragraphs = parts.last().is_some_and(|last| !last.ends_with('\n'));
        if !format.is_html() && after_paragraphs {
            parts.push(format!("\n{}", block));
        } else {
            parts.push(block);
        }
    }

    if let Some(text) = &node.text {
        let paragraphs: Vec<String> = reflow(text)
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect();

        if !paragraphs.is_empty() {
            parts.push(render_paragraphs(&paragraphs, format));
        }
    }

    for child in &node.children {
        collect_parts(child, depth + 1, format, parts);
    }
}

fn render_paragraphs(paragraphs: &[String], format: OutputFormat) -> String {
    if format.is_html() {
        paragraphs
            .iter()
            .map(|p| format!("<p>{}</p>", escape_html(p)))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        paragraphs.join("\n\n")
    }
}

fn html_shell(body: &str, title: &str, format: OutputFormat) -> String {
    let style = if format == OutputFormat::HtmlKindle { KINDLE_STYLE } else { HTML_STYLE };
    let body = if body.is_empty() { String::new() } else { format!("{}\n", body) };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        style,
        body
    )
}
