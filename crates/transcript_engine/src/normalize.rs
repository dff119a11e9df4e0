use once_cell::sync::Lazy;
use regex::Regex;

/// Tabs, carriage returns, vertical tabs and form feeds. Collapsing these
/// also folds CRLF line endings down to bare `\n`.
static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\r\x0B\x0C]+").unwrap());

/// Normalize extracted text into its final readable form:
/// horizontal whitespace collapsed to single spaces, every line trimmed,
/// at most one blank line between paragraphs, no leading or trailing
/// blank lines.
///
/// Running this on its own output is a no-op.
pub fn normalize_plain_text(input: &str) -> String {
    let text = HORIZONTAL_WS.replace_all(input, " ");
    let mut lines: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line);
        } else if lines.last().is_some_and(|last| !last.is_empty()) {
            // Keep a single blank line as a paragraph break.
            lines.push("");
        }
    }
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines.join("\n")
}
