//! Escaping utilities for Markdown and CSV output.
//!
//! Catalog text is free-form and may contain characters that break
//! Markdown tables or CSV quoting.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// Escapes pipe characters that would break table structure,
/// and backticks that could break formatting.
///
/// # Examples
///
/// ```
/// use chainaudit::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use in Markdown list items.
#[must_use]
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '`' => result.push_str("\\`"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Quote a CSV field per RFC 4180, flattening newlines.
///
/// # Examples
///
/// ```
/// use chainaudit::reports::escape::csv_field;
///
/// assert_eq!(csv_field("plain"), "\"plain\"");
/// assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
#[must_use]
pub fn csv_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\"").replace('\n', " "))
}
