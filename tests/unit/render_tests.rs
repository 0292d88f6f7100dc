/*!
 * Tests for document rendering
 */

use subprose::document::{build_tree, convert, render, RenderOptions};
use subprose::{OutputFormat, SourceItem};

fn archive_sources() -> Vec<SourceItem> {
    vec![
        SourceItem::new("S01E02.srt", "Second episode.").with_prefix(vec!["Show.zip".to_string()]),
        SourceItem::new("S01E01.srt", "First episode.").with_prefix(vec!["Show.zip".to_string()]),
    ]
}

/// Test that output follows name order, not insertion order
#[test]
fn test_convert_withUnsortedTopLevel_shouldRenderAlphabetically() {
    let sources = vec![SourceItem::new("b.srt", "Bee."), SourceItem::new("a.srt", "Ay.")];

    let output = convert(&sources, &RenderOptions::new(OutputFormat::Plain));
    let a = output.content.find("a\n=").unwrap();
    let b = output.content.find("b\n=").unwrap();
    assert!(a < b);
    assert_eq!(output.format, OutputFormat::Plain);
}

/// Test archive nesting in plain text
#[test]
fn test_convert_withArchive_shouldNestEpisodesUnderShowHeading() {
    let output = convert(&archive_sources(), &RenderOptions::new(OutputFormat::Plain));

    assert_eq!(
        output.content,
        "Show\n====\n\nS01E01\n------\n\nFirst episode.\n\nS01E02\n------\n\nSecond episode."
    );
}

/// Test each nesting level gets its own heading style
#[test]
fn test_convert_withDeepNesting_shouldUseOneLevelPerContainer() {
    let sources = vec![SourceItem::new("clip.srt", "Hi.").with_prefix(vec![
        "A.zip".to_string(),
        "B".to_string(),
        "C".to_string(),
    ])];

    let plain = convert(&sources, &RenderOptions::new(OutputFormat::Plain)).content;
    assert_eq!(plain, "A\n=\n\nB\n-\n\n### C\n\n#### clip\n\nHi.");

    let html = convert(&sources, &RenderOptions::new(OutputFormat::Html)).content;
    let levels: Vec<usize> = ["<h1>A</h1>", "<h2>B</h2>", "<h3>C</h3>", "<h4>clip</h4>"]
        .iter()
        .map(|tag| html.find(tag).unwrap())
        .collect();
    assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(html.contains("<h4>clip</h4>\n<p>Hi.</p>"));
}

/// Test a heading that follows paragraphs is set off by a blank line
#[test]
fn test_convert_withConsecutiveFiles_shouldSeparateTextFromNextHeading() {
    let sources = vec![
        SourceItem::new("b.srt", "Bee."),
        SourceItem::new("a.srt", "Ay."),
        SourceItem::new("c.srt", "\n"),
        SourceItem::new("d.srt", "Dee."),
    ];

    let output = convert(&sources, &RenderOptions::new(OutputFormat::Plain));
    assert_eq!(output.content, "a\n=\n\nAy.\n\nb\n=\n\nBee.\n\nc\n=\n\nd\n=\n\nDee.");
}

/// Test archive nesting in HTML
#[test]
fn test_convert_withArchiveAsHtml_shouldUseLevelOneAndTwoHeadings() {
    let output = convert(&archive_sources(), &RenderOptions::new(OutputFormat::Html));
    let content = &output.content;

    let show = content.find("<h1>Show</h1>").unwrap();
    let first = content.find("<h2>S01E01</h2>").unwrap();
    let second = content.find("<h2>S01E02</h2>").unwrap();
    assert!(show < first && first < second);
    assert!(content.contains("<p>First episode.</p>"));
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert_eq!(output.format, OutputFormat::Html);
}

/// Test that paragraphs are escaped in HTML output
#[test]
fn test_convert_withMarkupInText_shouldEscapeParagraphs() {
    let sources = vec![SourceItem::new("a.srt", "<i>Hi</i> & bye.")];
    let output = convert(&sources, &RenderOptions::new(OutputFormat::HtmlKindle));

    assert!(output.content.contains("<p>&lt;i&gt;Hi&lt;/i&gt; &amp; bye.</p>"));
    assert!(output.content.contains("<mbp:pagebreak />"));
}

/// Test the empty input case for every format
#[test]
fn test_convert_withNoSources_shouldProduceEmptyDocument() {
    assert_eq!(convert(&[], &RenderOptions::new(OutputFormat::Plain)).content, "");

    let html = convert(&[], &RenderOptions::new(OutputFormat::Html)).content;
    assert!(html.contains("<body>\n</body>"));
    assert!(!html.contains("<h1>"));
}

/// Test that rendering and sorting are idempotent
#[test]
fn test_render_twice_shouldBeByteIdentical() {
    let mut tree = build_tree(&archive_sources());
    tree.sort();
    let options = RenderOptions::new(OutputFormat::Html).with_title("Show");

    let first = render(&tree, &options);
    tree.sort();
    let second = render(&tree, &options);
    assert_eq!(first, second);
    assert!(first.contains("<title>Show</title>"));
}
