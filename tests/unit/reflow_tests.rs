/*!
 * Tests for paragraph reflow
 */

use subprose::reflow::{is_timing_line, reflow};
use crate::common;

/// Test that no timing line or cue index survives reflow
#[test]
fn test_reflow_withSampleSrt_shouldDropTimingAndIndexLines() {
    let paragraphs = reflow(common::SAMPLE_SRT);

    assert_eq!(paragraphs, vec!["This is a test subtitle.", "For testing purposes!"]);
    for paragraph in &paragraphs {
        assert!(!is_timing_line(paragraph));
        assert!(!paragraph.contains("-->"));
    }
}

/// Test the empty document edge case
#[test]
fn test_reflow_withEmptyText_shouldYieldSingleEmptyParagraph() {
    assert_eq!(reflow(""), vec![""]);
}

/// Test plain prose without any cue structure
#[test]
fn test_reflow_withoutTimingLines_shouldStillSplitSentences() {
    assert_eq!(reflow("Hello.\nWorld."), vec!["Hello.", "World."]);
}

/// Test that blank lines between cues never break a sentence
#[test]
fn test_reflow_withSentenceAcrossCues_shouldMergeIntoOneParagraph() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nI never\n\n\n2\n00:00:02,000 --> 00:00:03,000\nsaid that\n\n3\n00:00:03,000 --> 00:00:04,000\nto anyone?\n";
    assert_eq!(reflow(srt), vec!["I never said that to anyone?"]);
}

/// Test windows line endings from files written on other platforms
#[test]
fn test_reflow_withCrlfLineEndings_shouldMatchLfOutput() {
    let lf = common::SAMPLE_SRT;
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(reflow(&crlf), reflow(lf));
}

/// Test that a number not followed by a timing line is kept as text
#[test]
fn test_reflow_withStandaloneNumber_shouldKeepNumber() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nThe answer is\n42\n";
    assert_eq!(reflow(srt), vec!["The answer is 42"]);
}

/// Test that every sentence terminator closes a paragraph
#[test]
fn test_reflow_withEachTerminator_shouldCloseParagraph() {
    assert_eq!(reflow("Stop!\nWhy?\nBecause."), vec!["Stop!", "Why?", "Because."]);
}
