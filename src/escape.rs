/*!
 * HTML escaping for text embedded in generated documents.
 */

/// Replace the five HTML-significant characters with named character references.
///
/// Ampersands are handled in the same single pass as the other characters, so
/// already-produced references are never escaped twice.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
