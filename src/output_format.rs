use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

// @module: Output format descriptor shared by the renderer and collaborators

/// Document flavour produced by a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    // @format: Plain text with underlined headings
    #[default]
    Plain,
    // @format: Generic HTML
    Html,
    // @format: HTML with e-reader page breaks and denser styling
    HtmlKindle,
}

impl OutputFormat {
    /// Resolve the `{ html, kindle }` option pair; kindle implies html.
    pub fn from_flags(html: bool, kindle: bool) -> Self {
        match (html, kindle) {
            (_, true) => Self::HtmlKindle,
            (true, false) => Self::Html,
            (false, false) => Self::Plain,
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, Self::Html | Self::HtmlKindle)
    }

    // @returns: File extension without the dot
    pub fn extension(&self) -> &'static str {
        if self.is_html() { "html" } else { "txt" }
    }

    pub fn mime_type(&self) -> &'static str {
        if self.is_html() { "text/html" } else { "text/plain" }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Html => "html",
            Self::HtmlKindle => "html-kindle",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "txt" | "text" => Ok(Self::Plain),
            "html" => Ok(Self::Html),
            "html-kindle" | "kindle" => Ok(Self::HtmlKindle),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Result of a conversion handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    /// Rendered document
    pub content: String,

    /// Format actually used, to pick a file extension and MIME type
    pub format: OutputFormat,
}
