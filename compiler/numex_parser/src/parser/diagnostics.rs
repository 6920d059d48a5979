use super::error::ParseError;

/// Render a parse error with the offending source line and a caret under
/// the reported position.
///
/// ```text
/// error: unbalanced parenthesis at position 1
///   |
///   | (1
///   |  ^
/// ```
pub fn render_snippet(err: &ParseError, source: &str) -> String {
    let mut out = format!("error: {err}\n  |\n  | {source}\n");
    if let Some(position) = err.position() {
        // Offsets are bytes; the caret column counts characters.
        let column = source
            .get(..position)
            .map_or(position, |prefix| prefix.chars().count());
        out.push_str("  | ");
        out.push_str(&" ".repeat(column));
        out.push_str("^\n");
    }
    out
}
