//! Escaping of user text embedded in PowerShell double-quoted string literals.

/// PowerShell's escape character inside double-quoted strings.
const ESCAPE: char = '`';

/// Escape `text` for use inside a double-quoted PowerShell string.
///
/// Backticks are doubled, `$` and `"` get a leading backtick. Every character
/// is mapped from the input as typed, so an inserted escape is never escaped
/// again.
pub fn escape_for_script_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ESCAPE => {
                escaped.push(ESCAPE);
                escaped.push(ESCAPE);
            }
            '$' | '"' => {
                escaped.push(ESCAPE);
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Ensure a here-string body ends with exactly the newline it needs.
///
/// The closing `"@` delimiter must start its own line. Bodies are otherwise
/// embedded untouched since here-strings do not terminate on quotes.
pub fn normalize_block_body(body: &str) -> String {
    if body.ends_with('\n') { body.to_string() } else { format!("{}\n", body) }
}
