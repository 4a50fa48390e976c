//! Terminal output sanitization
//!
//! Listing titles, inquiry messages and anything else read back from the data directory
//! is user-controlled. Before printing it to a terminal, pass it through [`sanitize`] so
//! embedded ANSI sequences cannot clear the screen, move the cursor or restyle output.

/// Strip ANSI CSI sequences and control characters other than tab, newline and carriage
/// return
///
/// # Examples
///
/// ```
/// use property_explorer::utils::terminal::sanitize;
///
/// assert_eq!(sanitize("\x1b[31mCozy Loft\x1b[0m"), "Cozy Loft");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI runs until its final letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize and collapse to a single line, cut to at most `max_chars` with an ellipsis
pub fn single_line(text: &str, max_chars: usize) -> String {
    let flat: String = sanitize(text).split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }

    let kept: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
