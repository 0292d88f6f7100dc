/*!
 * Paragraph reflow for SRT-style subtitle text.
 *
 * Cue index lines, timing lines and blank lines are dropped; the remaining
 * caption lines are merged into paragraphs that end on sentence punctuation.
 */

// @const: Separator between start and end time on a cue timing line
const TIMING_MARKER: &str = " --> ";

// @const: Characters that close a paragraph when they end a line
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Convert one subtitle document into an ordered list of paragraphs.
///
/// The last buffer is only emitted when it holds text or when nothing else was
/// emitted, so `reflow("")` yields a single empty paragraph while a document
/// ending on punctuation yields no trailing empty one.
pub fn reflow(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut paragraphs = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for (i, &line) in lines.iter().enumerate() {
        let next = lines.get(i + 1).copied();
        if is_skip_line(line, next) {
            continue;
        }

        buffer.push(line);
        if line.ends_with(SENTENCE_TERMINATORS) {
            paragraphs.push(buffer.join(" "));
            buffer.clear();
        }
    }

    if !buffer.is_empty() || paragraphs.is_empty() {
        paragraphs.push(buffer.join(" "));
    }

    paragraphs
}

/// A timing line carries the marker somewhere after its first character.
pub fn is_timing_line(line: &str) -> bool {
    matches!(line.find(TIMING_MARKER), Some(pos) if pos > 0)
}

// @checks: Blank line, timing line, or the cue index right before a timing line
fn is_skip_line(line: &str, next: Option<&str>) -> bool {
    line.is_empty() || is_timing_line(line) || next.is_some_and(is_timing_line)
}
